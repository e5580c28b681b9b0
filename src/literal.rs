use crate::{Value, separated_by};
use std::fmt::Write;

macro_rules! write_integer {
    ($out:ident, $value:expr) => {{
        let mut buffer = itoa::Buffer::new();
        $out.push_str(buffer.format($value));
    }};
}
macro_rules! write_float {
    ($out:ident, $value:expr) => {{
        let mut buffer = ryu::Buffer::new();
        $out.push_str(buffer.format($value));
    }};
}

/// Render a value as a SQL literal for debug and log embedding.
///
/// Quoting is limited to doubling embedded single quotes. This is not an
/// escape routine for untrusted input and must never be used to build an
/// executable statement.
pub fn literal(value: &Value) -> String {
    let mut out = String::with_capacity(16);
    write_literal(&mut out, value);
    out
}

/// Buffer-writing form of [`literal`].
pub fn write_literal(out: &mut String, value: &Value) {
    match value {
        Value::Null => out.push_str("null"),
        Value::Boolean(v) => out.push_str(["false", "true"][*v as usize]),
        Value::Int8(v) => write_integer!(out, *v),
        Value::Int16(v) => write_integer!(out, *v),
        Value::Int32(v) => write_integer!(out, *v),
        Value::Int64(v) => write_integer!(out, *v),
        Value::UInt8(v) => write_integer!(out, *v),
        Value::UInt16(v) => write_integer!(out, *v),
        Value::UInt32(v) => write_integer!(out, *v),
        Value::UInt64(v) => write_integer!(out, *v),
        Value::Float32(v) => write_float!(out, *v),
        Value::Float64(v) => write_float!(out, *v),
        Value::Decimal(v) => {
            let _ = write!(out, "{}", v);
        }
        // The lone `?` is a placeholder passthrough, not a literal.
        Value::Varchar(v) if v == "?" => out.push('?'),
        Value::Varchar(v) => write_quoted(out, v),
        Value::Blob(v) => {
            out.push('\'');
            for b in v.as_ref() {
                let _ = write!(out, "\\x{:X}", b);
            }
            out.push('\'');
        }
        Value::Date(v) => {
            let _ = write!(out, "'{}'", v);
        }
        Value::Time(v) => {
            let _ = write!(out, "'{}'", v);
        }
        Value::Timestamp(v) => {
            let _ = write!(out, "'{}'", v);
        }
        Value::TimestampWithTimezone(v) => {
            let _ = write!(out, "'{}'", v);
        }
        Value::Uuid(v) => {
            let _ = write!(out, "'{}'", v);
        }
        Value::Array(v) => {
            out.push_str("array [");
            separated_by(out, v.iter(), |out, v| write_literal(out, v), ", ");
            out.push(']');
        }
        Value::List(v) => {
            separated_by(out, v.iter(), |out, v| write_literal(out, v), ", ");
        }
    }
}

fn write_quoted(out: &mut String, value: &str) {
    out.push('\'');
    let mut position = 0;
    for (i, c) in value.char_indices() {
        if c == '\'' {
            out.push_str(&value[position..i]);
            out.push_str("''");
            position = i + 1;
        }
    }
    out.push_str(&value[position..]);
    out.push('\'');
}
