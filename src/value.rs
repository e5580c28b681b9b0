use rust_decimal::Decimal;
use std::fmt::{self, Debug, Formatter};
use time::{Date, OffsetDateTime, PrimitiveDateTime, Time};
use uuid::Uuid;

/// Dynamically typed value bound to a SQL placeholder.
///
/// `List` and `Array` are distinct on purpose: both expand to multiple `?`
/// placeholders when bound to a list marker, but they render differently as
/// literals (`1, 2` versus `array [1, 2]`).
#[derive(Default, Clone, PartialEq)]
pub enum Value {
    #[default]
    Null,
    Boolean(bool),
    Int8(i8),
    Int16(i16),
    Int32(i32),
    Int64(i64),
    UInt8(u8),
    UInt16(u16),
    UInt32(u32),
    UInt64(u64),
    Float32(f32),
    Float64(f64),
    Decimal(Decimal),
    Varchar(String),
    Blob(Box<[u8]>),
    Date(Date),
    Time(Time),
    Timestamp(PrimitiveDateTime),
    TimestampWithTimezone(OffsetDateTime),
    Uuid(Uuid),
    /// Fixed-size array, rendered wrapped as `array [ ... ]`.
    Array(Box<[Value]>),
    /// Variable-size list, rendered as comma-joined elements.
    List(Vec<Value>),
}

impl Value {
    /// Whether this value expands to multiple placeholders when bound to a
    /// list marker (`<?>` or `<:name>`).
    pub fn is_collection(&self) -> bool {
        matches!(self, Value::Array(..) | Value::List(..))
    }

    /// Elements of a collection value, `None` for scalar values.
    pub fn elements(&self) -> Option<&[Value]> {
        match self {
            Value::Array(v) => Some(v),
            Value::List(v) => Some(v),
            _ => None,
        }
    }

    /// Number of placeholders this value occupies after list expansion.
    pub fn expansion_len(&self) -> usize {
        self.elements().map_or(1, <[Value]>::len)
    }
}

impl Debug for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Boolean(v) => write!(f, "{}", v),
            Value::Int8(v) => write!(f, "{}", v),
            Value::Int16(v) => write!(f, "{}", v),
            Value::Int32(v) => write!(f, "{}", v),
            Value::Int64(v) => write!(f, "{}", v),
            Value::UInt8(v) => write!(f, "{}", v),
            Value::UInt16(v) => write!(f, "{}", v),
            Value::UInt32(v) => write!(f, "{}", v),
            Value::UInt64(v) => write!(f, "{}", v),
            Value::Float32(v) => write!(f, "{}", v),
            Value::Float64(v) => write!(f, "{}", v),
            Value::Decimal(v) => write!(f, "{}", v),
            Value::Varchar(v) => write!(f, "{}", v),
            Value::Blob(v) => write!(f, "{:?}", v),
            Value::Date(v) => write!(f, "{}", v),
            Value::Time(v) => write!(f, "{}", v),
            Value::Timestamp(v) => write!(f, "{}", v),
            Value::TimestampWithTimezone(v) => write!(f, "{}", v),
            Value::Uuid(v) => write!(f, "{}", v),
            Value::Array(v) => f.debug_list().entries(v.iter()).finish(),
            Value::List(v) => f.debug_list().entries(v.iter()).finish(),
        }
    }
}
