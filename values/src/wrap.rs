//! The wrap/as pair: native values into [`Value`] and back.
//!
//! [`IntoValue`] is total. [`FromValue`] checks the shape and does no
//! coercion between categories; cross-category numeric conversion is the
//! job of [`cast`](crate::cast).

use core::any::type_name;

use crate::{List, TextCell, Value, ValueError};

/// Conversion of a native value into dynamic form.
pub trait IntoValue {
    fn into_value(self) -> Value;
}

/// Conversion of a dynamic value into a native type.
pub trait FromValue: Sized {
    fn from_value(value: &Value) -> Result<Self, ValueError>;
}

/// Wrap a native value.
pub fn wrap<T: IntoValue>(value: T) -> Value {
    value.into_value()
}

/// Read a dynamic value as `T`.
pub fn as_type<T: FromValue>(value: &Value) -> Result<T, ValueError> {
    T::from_value(value)
}

fn mismatch<T>(value: &Value) -> ValueError {
    ValueError::Conversion {
        from: value.tag(),
        to: type_name::<T>(),
    }
}

// =============================================================================
// IntoValue
// =============================================================================

impl IntoValue for Value {
    #[inline]
    fn into_value(self) -> Value {
        self
    }
}

impl IntoValue for &Value {
    fn into_value(self) -> Value {
        self.clone()
    }
}

impl IntoValue for () {
    fn into_value(self) -> Value {
        Value::Nil
    }
}

impl IntoValue for bool {
    fn into_value(self) -> Value {
        Value::Logical(Some(self))
    }
}

impl IntoValue for Option<bool> {
    fn into_value(self) -> Value {
        Value::Logical(self)
    }
}

/// `i32::MIN` is the integer NA, the same rule [`cast`](crate::cast) applies.
impl IntoValue for i32 {
    fn into_value(self) -> Value {
        Value::Integer(Some(self).filter(|v| *v != i32::MIN))
    }
}

impl IntoValue for Option<i32> {
    fn into_value(self) -> Value {
        Value::Integer(self.filter(|v| *v != i32::MIN))
    }
}

/// Wider integers do not fit the integer category and become doubles.
impl IntoValue for i64 {
    fn into_value(self) -> Value {
        Value::Double(self as f64)
    }
}

impl IntoValue for f64 {
    fn into_value(self) -> Value {
        Value::Double(self)
    }
}

impl IntoValue for f32 {
    fn into_value(self) -> Value {
        Value::Double(f64::from(self))
    }
}

impl IntoValue for TextCell {
    fn into_value(self) -> Value {
        Value::Text(self)
    }
}

impl IntoValue for &str {
    fn into_value(self) -> Value {
        Value::Text(TextCell::new(self))
    }
}

impl IntoValue for String {
    fn into_value(self) -> Value {
        Value::Text(TextCell::from(self))
    }
}

impl IntoValue for &String {
    fn into_value(self) -> Value {
        Value::Text(TextCell::new(self))
    }
}

impl IntoValue for char {
    fn into_value(self) -> Value {
        Value::Text(TextCell::from(self))
    }
}

impl IntoValue for List {
    fn into_value(self) -> Value {
        Value::List(self)
    }
}

impl IntoValue for &List {
    fn into_value(self) -> Value {
        Value::List(self.clone())
    }
}

/// A vector becomes a new unnamed list.
impl<T: IntoValue> IntoValue for Vec<T> {
    fn into_value(self) -> Value {
        Value::List(self.into_iter().map(IntoValue::into_value).collect())
    }
}

// =============================================================================
// FromValue
// =============================================================================

impl FromValue for Value {
    fn from_value(value: &Value) -> Result<Self, ValueError> {
        Ok(value.clone())
    }
}

/// Nil reads as a fresh empty list.
impl FromValue for List {
    fn from_value(value: &Value) -> Result<Self, ValueError> {
        match value {
            Value::List(list) => Ok(list.clone()),
            Value::Nil => Ok(List::new()),
            other => Err(mismatch::<Self>(other)),
        }
    }
}

impl FromValue for TextCell {
    fn from_value(value: &Value) -> Result<Self, ValueError> {
        match value {
            Value::Text(text) => Ok(text.clone()),
            other => Err(mismatch::<Self>(other)),
        }
    }
}

impl FromValue for String {
    fn from_value(value: &Value) -> Result<Self, ValueError> {
        match value {
            Value::Text(text) => Ok(text.as_str().to_owned()),
            other => Err(mismatch::<Self>(other)),
        }
    }
}

impl FromValue for Option<bool> {
    fn from_value(value: &Value) -> Result<Self, ValueError> {
        match value {
            Value::Logical(v) => Ok(*v),
            other => Err(mismatch::<Self>(other)),
        }
    }
}

impl FromValue for bool {
    fn from_value(value: &Value) -> Result<Self, ValueError> {
        match value {
            Value::Logical(Some(v)) => Ok(*v),
            other => Err(mismatch::<Self>(other)),
        }
    }
}

impl FromValue for Option<i32> {
    fn from_value(value: &Value) -> Result<Self, ValueError> {
        match value {
            Value::Integer(v) => Ok(*v),
            other => Err(mismatch::<Self>(other)),
        }
    }
}

impl FromValue for i32 {
    fn from_value(value: &Value) -> Result<Self, ValueError> {
        match value {
            Value::Integer(Some(v)) => Ok(*v),
            other => Err(mismatch::<Self>(other)),
        }
    }
}

impl FromValue for f64 {
    fn from_value(value: &Value) -> Result<Self, ValueError> {
        match value {
            Value::Double(v) => Ok(*v),
            other => Err(mismatch::<Self>(other)),
        }
    }
}
