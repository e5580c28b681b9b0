use crate::{AsValue, Error, Result, Value, literal};
use std::collections::BTreeMap;

/// Inlines literal-rendered values into the `{?}` embeddable markers of a
/// template, left to right.
///
/// The result is for logging and debugging only; it is never safe to
/// execute. Markers left unresolved because no value was supplied make the
/// whole operation fail.
pub fn embed_ordered(sql: &str, parameters: &[Value]) -> Result<String> {
    const MARKER: &str = "{?}";
    let mut out = String::with_capacity(sql.len());
    let mut rest = sql;
    let mut values = parameters.iter();
    while let Some(pos) = rest.find(MARKER) {
        let Some(value) = values.next() else {
            return Err(Error::msg(format!(
                "could not embed all parameters: sql={}, parameters={:?}",
                sql, parameters,
            )));
        };
        out.push_str(&rest[..pos]);
        out.push_str(&literal(value));
        rest = &rest[pos + MARKER.len()..];
    }
    out.push_str(rest);
    Ok(out)
}

/// Named form of [`embed_ordered`]: resolves `{:name}` markers by their
/// textual position, then inlines the matching values. Supplied names with
/// no marker are ignored; a marker with no matching name fails.
pub fn embed_named(
    sql: &str,
    parameters: impl IntoIterator<Item = (impl Into<String>, impl AsValue)>,
) -> Result<String> {
    let mut ordered: BTreeMap<usize, Value> = BTreeMap::new();
    for (name, value) in parameters {
        let marker = format!("{{:{}}}", name.into());
        if let Some(pos) = sql.find(&marker) {
            ordered.insert(pos, value.as_value());
        }
    }
    let values: Vec<Value> = ordered.into_values().collect();
    embed_ordered(&rewrite_named_markers(sql), &values)
}

/// Turns every `{:name}` marker into the positional `{?}` form.
fn rewrite_named_markers(sql: &str) -> String {
    let mut out = String::with_capacity(sql.len());
    let mut rest = sql;
    while let Some(start) = rest.find("{:") {
        match rest[start..].find('}') {
            Some(len) => {
                out.push_str(&rest[..start]);
                out.push_str("{?}");
                rest = &rest[start + len + 1..];
            }
            None => break,
        }
    }
    out.push_str(rest);
    out
}
