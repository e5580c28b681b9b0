use crate::Value;
use rust_decimal::Decimal;
use std::borrow::Cow;
use time::{Date, OffsetDateTime, PrimitiveDateTime, Time};
use uuid::Uuid;

/// Conversion from native Rust types into the dynamically typed [`Value`]
/// representation that backs placeholder parameters.
///
/// Collections pick the `Value` variant that matches their static shape:
/// `Vec<T>` and slices become [`Value::List`], fixed-size arrays become
/// [`Value::Array`]. The distinction carries through to literal rendering.
pub trait AsValue {
    fn as_value(self) -> Value;
}

impl AsValue for Value {
    fn as_value(self) -> Value {
        self
    }
}

macro_rules! impl_as_value {
    ($type:ty, $variant:ident) => {
        impl AsValue for $type {
            fn as_value(self) -> Value {
                Value::$variant(self.into())
            }
        }
    };
}

impl_as_value!(bool, Boolean);
impl_as_value!(i8, Int8);
impl_as_value!(i16, Int16);
impl_as_value!(i32, Int32);
impl_as_value!(i64, Int64);
impl_as_value!(u8, UInt8);
impl_as_value!(u16, UInt16);
impl_as_value!(u32, UInt32);
impl_as_value!(u64, UInt64);
impl_as_value!(f32, Float32);
impl_as_value!(f64, Float64);
impl_as_value!(Decimal, Decimal);
impl_as_value!(String, Varchar);
impl_as_value!(&str, Varchar);
impl_as_value!(Box<[u8]>, Blob);
impl_as_value!(Date, Date);
impl_as_value!(Time, Time);
impl_as_value!(PrimitiveDateTime, Timestamp);
impl_as_value!(OffsetDateTime, TimestampWithTimezone);
impl_as_value!(Uuid, Uuid);

impl AsValue for Cow<'_, str> {
    fn as_value(self) -> Value {
        Value::Varchar(self.into_owned())
    }
}

impl<V: AsValue> AsValue for Option<V> {
    fn as_value(self) -> Value {
        match self {
            Some(v) => v.as_value(),
            None => Value::Null,
        }
    }
}

impl<V: AsValue> AsValue for Vec<V> {
    fn as_value(self) -> Value {
        Value::List(self.into_iter().map(AsValue::as_value).collect())
    }
}

impl<V: AsValue + Clone> AsValue for &[V] {
    fn as_value(self) -> Value {
        Value::List(self.iter().cloned().map(AsValue::as_value).collect())
    }
}

impl<V: AsValue, const N: usize> AsValue for [V; N] {
    fn as_value(self) -> Value {
        Value::Array(self.into_iter().map(AsValue::as_value).collect())
    }
}
