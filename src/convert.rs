//! Per-element conversion strategies.
//!
//! A strategy turns an input of some type `U` into the storage form of one
//! type tag. There are three:
//!
//! - [`Primitive<G>`]: logical, integer and double storage. Inputs that are
//!   already `G::Storage` pass through; everything else goes through
//!   [`cast`](listof_values::cast), which owns truncation and NA semantics.
//! - [`Text`]: anything [`IntoText`] becomes an interned [`TextCell`].
//! - [`Generic`]: anything [`IntoValue`] becomes a [`Value`]; a `Value` passes
//!   through and a `&str` is wrapped as text.
//!
//! Which strategy applies to a tag is fixed at compile time by
//! [`TagConverter`]. There is no run-time strategy object.

use core::marker::PhantomData;

use listof_values::cast::CastTo;
use listof_values::{
    DoubleTag, GenericTag, IntegerTag, IntoValue, LogicalTag, Tag, TextCell, TextTag, TypeTag,
    Value,
};

use crate::{Error, Result};

/// Conversion of an input `U` into a tag's storage.
pub trait Strategy<U> {
    type Target;

    fn get(input: U) -> Result<Self::Target>;
}

/// Cast strategy for the numeric and logical tags.
pub struct Primitive<G>(PhantomData<G>);

/// Text strategy: wraps stringable input as a [`TextCell`].
pub struct Text;

/// Generic strategy: the wrap path, producing a [`Value`].
pub struct Generic;

/// The strategy each tag converts slot values with.
pub trait TagConverter: Tag {
    type Converter: Strategy<Value, Target = Self::Storage>;
}

impl TagConverter for LogicalTag {
    type Converter = Primitive<LogicalTag>;
}

impl TagConverter for IntegerTag {
    type Converter = Primitive<IntegerTag>;
}

impl TagConverter for DoubleTag {
    type Converter = Primitive<DoubleTag>;
}

impl TagConverter for TextTag {
    type Converter = Text;
}

impl TagConverter for GenericTag {
    type Converter = Generic;
}

/// Convert a value with the strategy `G` selects.
pub fn convert<G: TagConverter>(value: Value) -> Result<G::Storage> {
    <G::Converter as Strategy<Value>>::get(value)
}

// =============================================================================
// Primitive
// =============================================================================

macro_rules! primitive_strategy {
    ($tag:ty => $storage:ty, from [$($src:ty),* $(,)?]) => {
        impl Strategy<$storage> for Primitive<$tag> {
            type Target = $storage;

            #[inline]
            fn get(input: $storage) -> Result<$storage> {
                Ok(input)
            }
        }

        $(
            impl Strategy<$src> for Primitive<$tag> {
                type Target = $storage;

                fn get(input: $src) -> Result<$storage> {
                    Ok(CastTo::<$storage>::cast_to(input))
                }
            }
        )*

        impl Strategy<Value> for Primitive<$tag> {
            type Target = $storage;

            fn get(input: Value) -> Result<$storage> {
                match input {
                    Value::Logical(x) => <Self as Strategy<Option<bool>>>::get(x),
                    Value::Integer(x) => <Self as Strategy<Option<i32>>>::get(x),
                    Value::Double(x) => <Self as Strategy<f64>>::get(x),
                    other => Err(Error::Conversion {
                        from: other.tag(),
                        to: <$tag as Tag>::TAG,
                    }),
                }
            }
        }
    };
}

primitive_strategy!(LogicalTag => Option<bool>, from [bool, i32, Option<i32>, i64, usize, f64, f32]);
primitive_strategy!(IntegerTag => Option<i32>, from [bool, Option<bool>, i32, i64, usize, f64, f32]);
primitive_strategy!(DoubleTag => f64, from [bool, Option<bool>, i32, Option<i32>, i64, usize, f32]);

// =============================================================================
// Text
// =============================================================================

/// Input the [`Text`] strategy accepts.
pub trait IntoText {
    fn into_text(self) -> Result<TextCell>;
}

impl IntoText for &str {
    fn into_text(self) -> Result<TextCell> {
        Ok(TextCell::new(self))
    }
}

impl IntoText for String {
    fn into_text(self) -> Result<TextCell> {
        Ok(TextCell::from(self))
    }
}

impl IntoText for &String {
    fn into_text(self) -> Result<TextCell> {
        Ok(TextCell::new(self))
    }
}

impl IntoText for char {
    fn into_text(self) -> Result<TextCell> {
        Ok(TextCell::from(self))
    }
}

impl IntoText for TextCell {
    #[inline]
    fn into_text(self) -> Result<TextCell> {
        Ok(self)
    }
}

impl IntoText for &TextCell {
    fn into_text(self) -> Result<TextCell> {
        Ok(self.clone())
    }
}

/// Only text values have a text form; there is no implicit formatting.
impl IntoText for Value {
    fn into_text(self) -> Result<TextCell> {
        match self {
            Value::Text(text) => Ok(text),
            other => Err(Error::Conversion {
                from: other.tag(),
                to: TypeTag::Text,
            }),
        }
    }
}

impl<U: IntoText> Strategy<U> for Text {
    type Target = TextCell;

    fn get(input: U) -> Result<TextCell> {
        input.into_text()
    }
}

// =============================================================================
// Generic
// =============================================================================

impl<U: IntoValue> Strategy<U> for Generic {
    type Target = Value;

    fn get(input: U) -> Result<Value> {
        Ok(input.into_value())
    }
}

#[cfg(test)]
#[path = "convert_test.rs"]
mod convert_test;
