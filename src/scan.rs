//! Scanning routines locating placeholder occurrences inside a SQL template.
//!
//! Four marker shapes exist: plain ordered `?`, named `prefix + name [+
//! suffix]`, list `<?>` / `<:name>`, and embeddable `{?}` / `{:name}`. The
//! scanner only locates them; binders decide what each occurrence consumes.

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Collects every named-parameter token appearing after `prefix` in the
/// template, in textual order, duplicates included. A name is a maximal run
/// of `[A-Za-z0-9_]`, optionally terminated by `suffix`.
pub fn scan_names<'s>(sql: &'s str, prefix: &str, suffix: &str) -> Vec<&'s str> {
    let mut names = Vec::new();
    if prefix.is_empty() {
        return names;
    }
    let mut rest = sql;
    let mut offset = 0;
    while let Some(pos) = rest.find(prefix) {
        let start = offset + pos + prefix.len();
        let tail = &sql[start..];
        let len = tail
            .chars()
            .take_while(|&c| is_name_char(c) && !suffix.starts_with(c))
            .map(char::len_utf8)
            .sum::<usize>();
        if len > 0 {
            names.push(&sql[start..start + len]);
        }
        offset = start + len;
        rest = &sql[offset..];
    }
    names
}

/// Number of `?` placeholders in the template, counting the `?` inside
/// `<?>` and `{?}` markers once each.
pub fn count_placeholders(sql: &str) -> usize {
    sql.bytes().filter(|&b| b == b'?').count()
}

/// Parameter indexes whose `?` occurrence is wrapped as `open ? close`.
///
/// Every `?` in the template advances the parameter index; the returned
/// indexes are the ones falling on the wrapped occurrences. This is how the
/// ordered binder knows which positional slots hold list (`<?>`) or
/// embeddable (`{?}`) values.
pub fn special_placeholder_indexes(sql: &str, open: char, close: char) -> Vec<usize> {
    let chars: Vec<char> = sql.chars().collect();
    let mut indexes = Vec::new();
    let mut parameter = 0;
    for (i, &c) in chars.iter().enumerate() {
        if c != '?' {
            continue;
        }
        if i > 0 && chars[i - 1] == open && i + 1 < chars.len() && chars[i + 1] == close {
            indexes.push(parameter);
        }
        parameter += 1;
    }
    indexes
}

/// Whether the token occupying `range` in `sql` is wrapped by `open`/`close`
/// (the `<:name>` list-marker context for named binders).
pub fn is_wrapped(sql: &str, start: usize, end: usize, open: char, close: char) -> bool {
    sql[..start].chars().next_back() == Some(open) && sql[end..].chars().next() == Some(close)
}
