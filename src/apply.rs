//! `lapply`/`sapply` over a [`ListOf`].
//!
//! Both unwrap the view and hand its list to the list-level primitive in
//! [`listof_values::apply`], reading each element as `T` on the way in.

use listof_values::{IntoValue, List, apply};

use crate::element::{Element, read};
use crate::{ListOf, Result};

/// Apply `f` to every element, collecting the results into a new list.
///
/// The result has one element per input, in order, and keeps the names.
pub fn lapply<T, R, F>(view: &ListOf<T>, mut f: F) -> Result<List>
where
    T: Element,
    R: IntoValue,
    F: FnMut(T) -> R,
{
    apply::lapply(view.as_list(), |value| read::<T>(value).map(&mut f))
}

/// Apply `f` to every element, collecting the results into `C`.
///
/// `C` is any `FromIterator<R>`, which includes the view's own element type
/// whenever `T` collects from `R`: a `ListOf<String>` mapped to `char`s can
/// come back as a `String`.
///
/// ```
/// use listof::{ListOf, sapply};
/// use listof::values::{List, wrap};
///
/// let view = ListOf::<String>::from_list(List::from_values([wrap("ab"), wrap("cd")]));
/// let initials: String = sapply(&view, |s: String| s.chars().next().unwrap_or(' ')).unwrap();
/// assert_eq!(initials, "ac");
/// ```
pub fn sapply<T, R, C, F>(view: &ListOf<T>, mut f: F) -> Result<C>
where
    T: Element,
    C: FromIterator<R>,
    F: FnMut(T) -> R,
{
    apply::sapply(view.as_list(), |value| read::<T>(value).map(&mut f))
}
