//! Errors surfaced by typed list access.

use listof_values::{TypeTag, ValueError};
use miette::Diagnostic;
use thiserror::Error;

/// Failure of a read or write through a [`ListOf`](crate::ListOf).
///
/// Failures that say "there is no such slot" and failures that say "the slot
/// holds something that cannot become `T`" are separate variants; see
/// [`Error::is_missing`] and [`Error::is_conversion`].
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum Error {
    /// Raised by the dynamic list itself: out-of-range index, read-side name
    /// miss, or a failed `as` conversion. Passed through unchanged.
    #[error(transparent)]
    #[diagnostic(code(listof::value))]
    Value(#[from] ValueError),

    /// A write addressed a name the list does not have.
    #[error("No name '{name}' in the names of the list supplied")]
    #[diagnostic(
        code(listof::name_not_found),
        help("writes by name can only replace existing elements")
    )]
    NoSuchName { name: String },

    /// A conversion strategy could not produce the target storage.
    #[error("cannot convert {from} value to {to}")]
    #[diagnostic(code(listof::conversion))]
    Conversion { from: TypeTag, to: TypeTag },

    /// An NA was read into a type that cannot represent it.
    #[error("missing {tag} value cannot be represented as `{to}`")]
    #[diagnostic(code(listof::not_available))]
    NotAvailable { tag: TypeTag, to: &'static str },

    /// Strict access found a slot whose run-time tag differs from the view's.
    #[error("expected {expected} element, found {found}")]
    #[diagnostic(code(listof::tag_mismatch))]
    TagMismatch { expected: TypeTag, found: TypeTag },
}

impl Error {
    /// The addressed element does not exist.
    pub fn is_missing(&self) -> bool {
        matches!(
            self,
            Error::NoSuchName { .. }
                | Error::Value(ValueError::OutOfRange { .. } | ValueError::NameNotFound { .. })
        )
    }

    /// The element exists but could not be converted.
    pub fn is_conversion(&self) -> bool {
        matches!(
            self,
            Error::Conversion { .. }
                | Error::NotAvailable { .. }
                | Error::TagMismatch { .. }
                | Error::Value(ValueError::Conversion { .. })
        )
    }
}

pub type Result<T, E = Error> = core::result::Result<T, E>;
