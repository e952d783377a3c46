//! Dynamic value representation shared by the `listof` core.
//!
//! A [`Value`] is a tagged union: every value carries its own run-time
//! [`TypeTag`]. Lists of values are [`List`]s, a reference-counted handle over
//! an ordered sequence with optional per-element names. Cloning a `List`
//! clones the handle, so writes through one handle are visible through all of
//! them.
//!
//! # Example
//!
//! ```
//! use listof_values::{List, Value, wrap};
//!
//! let list = List::with_names([wrap(1.5), wrap("x")], ["a", "b"]).unwrap();
//! let alias = list.clone();
//! list.slot(0).set(wrap(2.5)).unwrap();
//!
//! assert_eq!(alias.get(0).unwrap(), Value::Double(2.5));
//! assert_eq!(alias.get_by_name("b").unwrap(), wrap("x"));
//! ```

#![deny(unsafe_code)]

pub mod apply;
pub mod cast;
mod error;
pub mod list;
pub mod tag;
mod text;
mod value;
mod wrap;

pub use error::ValueError;
pub use list::{List, Slot};
pub use tag::{DoubleTag, GenericTag, IntegerTag, LogicalTag, Tag, TextTag, TypeTag};
pub use text::TextCell;
pub use value::Value;
pub use wrap::{FromValue, IntoValue, as_type, wrap};
