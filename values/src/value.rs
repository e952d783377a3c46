use crate::{List, TextCell, TypeTag};

/// A dynamically typed value.
///
/// Each variant is one storage category; [`Value::tag`] reports which. Missing
/// values (NA) are `None` for logicals and integers and NaN for doubles.
#[derive(Debug, Clone, Default)]
pub enum Value {
    #[default]
    Nil,
    Logical(Option<bool>),
    Integer(Option<i32>),
    Double(f64),
    Text(TextCell),
    List(List),
}

impl Value {
    /// The run-time tag of this value.
    pub fn tag(&self) -> TypeTag {
        match self {
            Value::Nil => TypeTag::Nil,
            Value::Logical(_) => TypeTag::Logical,
            Value::Integer(_) => TypeTag::Integer,
            Value::Double(_) => TypeTag::Double,
            Value::Text(_) => TypeTag::Text,
            Value::List(_) => TypeTag::Generic,
        }
    }

    pub fn is_nil(&self) -> bool {
        matches!(self, Value::Nil)
    }

    /// Whether this is a missing logical, integer or double.
    pub fn is_na(&self) -> bool {
        match self {
            Value::Logical(v) => v.is_none(),
            Value::Integer(v) => v.is_none(),
            Value::Double(v) => v.is_nan(),
            _ => false,
        }
    }

    pub fn as_list(&self) -> Option<&List> {
        match self {
            Value::List(list) => Some(list),
            _ => None,
        }
    }
}

/// Structural equality. Two NA doubles compare equal, and lists compare by
/// contents and names.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Nil, Value::Nil) => true,
            (Value::Logical(a), Value::Logical(b)) => a == b,
            (Value::Integer(a), Value::Integer(b)) => a == b,
            (Value::Double(a), Value::Double(b)) => a == b || (a.is_nan() && b.is_nan()),
            (Value::Text(a), Value::Text(b)) => a == b,
            (Value::List(a), Value::List(b)) => a == b,
            _ => false,
        }
    }
}

macro_rules! from_native {
    ($($native:ty),* $(,)?) => {
        $(
            impl From<$native> for Value {
                fn from(value: $native) -> Self {
                    crate::IntoValue::into_value(value)
                }
            }
        )*
    };
}

from_native!(bool, Option<bool>, i32, Option<i32>, f64, &str, String, TextCell, List);
