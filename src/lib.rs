//! Typed views over dynamically typed lists.
//!
//! The host side stores lists as [`List`](values::List): ordered, optionally
//! named, every element carrying its own run-time tag. Native code wants
//! `Vec<f64>`-like access. [`ListOf<T>`] sits in between: it wraps the list
//! handle, reads elements as `T`, and writes back through [`lhs`].
//!
//! # Reading
//!
//! ```
//! use listof::ListOf;
//! use listof::values::{List, wrap};
//!
//! let list = List::with_names([wrap("ann"), wrap("bob"), wrap("ann")], ["a", "b", "a"]).unwrap();
//! let view = ListOf::<String>::from_list(list);
//!
//! assert_eq!(view.get(1).unwrap(), "bob");
//! assert_eq!(view.get("a").unwrap(), "ann");
//! assert!(view.get("c").unwrap_err().is_missing());
//! ```
//!
//! # Conversion
//!
//! Reads pick one of three strategies from `T`'s type tag at compile time
//! (see [`convert`]): a numeric/logical cast, a text wrap, or the generic
//! pass-through. Mismatched slots are not rejected up front; they fail at the
//! conversion step unless [`AccessMode::Strict`] is requested.
//!
//! # Writing
//!
//! ```
//! use listof::{ListOf, lhs};
//! use listof::values::List;
//!
//! let view = ListOf::<f64>::from_list(List::from_values([1.0.into(), 2.0.into()]));
//! let alias = view.clone();
//!
//! lhs(&view).set(1, 5.0).unwrap();
//! assert_eq!(alias.get(1).unwrap(), 5.0);
//! ```

#![deny(unsafe_code)]

pub mod apply;
pub mod convert;
mod element;
mod error;
mod list_of;
mod proxy;

pub use listof_values as values;

pub use apply::{lapply, sapply};
pub use element::Element;
pub use error::{Error, Result};
pub use list_of::{AccessMode, Iter, ListKey, ListOf};
pub use proxy::{ListOfProxy, lhs};

/// Test utilities for enabling logging in tests
#[cfg(test)]
pub mod test_utils {
    /// Initialize a tracing subscriber at DEBUG level, honoring `RUST_LOG`.
    ///
    /// Safe to call from every test; only the first call installs it.
    pub fn init_test_logging() {
        use tracing_subscriber::{EnvFilter, fmt};

        let _ = fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
            )
            .with_test_writer()
            .try_init();
    }
}
