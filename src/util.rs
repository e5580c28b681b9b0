/// Joins `values` into `out` through `f`, inserting `separator` between the
/// pieces that actually produced output.
pub fn separated_by<T, F>(
    out: &mut String,
    values: impl IntoIterator<Item = T>,
    mut f: F,
    separator: &str,
) where
    F: FnMut(&mut String, T),
{
    let mut len = out.len();
    for v in values {
        if out.len() > len {
            out.push_str(separator);
        }
        len = out.len();
        f(out, v);
    }
}

/// Splits `items` into `ceil(len / size)` contiguous slices: every slice has
/// exactly `size` elements except the last, which holds the remainder.
///
/// The plan is recomputed on each call and carries no identity of its own.
pub fn partition<T>(size: usize, items: &[T]) -> Vec<&[T]> {
    debug_assert!(size > 0, "partition size must be positive");
    items.chunks(size.max(1)).collect()
}
