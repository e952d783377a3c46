//! Type tags: the storage category of a value.
//!
//! [`TypeTag`] is the run-time tag every [`Value`] reports. The zero-sized
//! markers ([`LogicalTag`], [`IntegerTag`], ...) are the same categories at
//! compile time; [`Tag::Storage`] names the native type a value of that
//! category is stored as.

use core::fmt;

use crate::{TextCell, Value};

/// Run-time storage category of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeTag {
    Nil,
    Logical,
    Integer,
    Double,
    Text,
    /// Any value, including lists.
    Generic,
}

impl TypeTag {
    pub fn name(self) -> &'static str {
        match self {
            TypeTag::Nil => "nil",
            TypeTag::Logical => "logical",
            TypeTag::Integer => "integer",
            TypeTag::Double => "double",
            TypeTag::Text => "text",
            TypeTag::Generic => "generic",
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Compile-time storage category.
pub trait Tag: 'static {
    /// The run-time tag this marker stands for.
    const TAG: TypeTag;

    /// Native storage for values of this category.
    type Storage;
}

macro_rules! tags {
    ($($(#[$meta:meta])* $marker:ident => $tag:ident, $storage:ty;)*) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
            pub struct $marker;

            impl Tag for $marker {
                const TAG: TypeTag = TypeTag::$tag;
                type Storage = $storage;
            }
        )*
    };
}

tags! {
    /// Logical values; `None` is NA.
    LogicalTag => Logical, Option<bool>;
    /// 32-bit integers; `None` is NA.
    IntegerTag => Integer, Option<i32>;
    /// Doubles; NaN is NA.
    DoubleTag => Double, f64;
    /// Interned text cells.
    TextTag => Text, TextCell;
    /// Anything, kept in dynamic form.
    GenericTag => Generic, Value;
}
