use thiserror::Error;

use crate::tag::TypeTag;

/// Failures raised by the dynamic list and the wrap/as conversions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueError {
    /// An integer index outside `[0, len)`.
    #[error("index {index} out of bounds for list of length {len}")]
    OutOfRange { index: usize, len: usize },

    /// No name in the list's name metadata matched.
    #[error("no element named '{name}'")]
    NameNotFound { name: String },

    /// The value's shape does not fit the requested native type.
    #[error("cannot convert {from} value to `{to}`")]
    Conversion { from: TypeTag, to: &'static str },

    /// A names vector whose length differs from the list's.
    #[error("names vector has {names} entries but the list has {values}")]
    NamesLength { names: usize, values: usize },
}
