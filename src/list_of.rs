//! The typed list view.
//!
//! `ListOf<T>` wraps a [`List`] handle with a compile-time element type `T`.
//! It stores nothing but the handle: copying a view copies the handle, and
//! dropping a view never drops the list out from under other handles.
//!
//! Reads do not check the slot's run-time tag against `T` unless asked to
//! with [`AccessMode::Strict`]. In the default lenient mode a mismatched slot
//! goes through `T`'s conversion strategy and either converts (an integer
//! read as `f64`) or fails there with a conversion error.
//!
//! # Example
//!
//! ```
//! use listof::{ListOf, lhs};
//! use listof::values::{List, wrap};
//!
//! let list = List::with_names([wrap(1.0), wrap(2), wrap(true)], ["a", "b", "c"]).unwrap();
//! let view = ListOf::<f64>::from_list(list);
//!
//! assert_eq!(view.get("b").unwrap(), 2.0);
//! assert_eq!(view.iter().collect::<Result<Vec<_>, _>>().unwrap(), [1.0, 2.0, 1.0]);
//!
//! lhs(&view).set("c", 3.5).unwrap();
//! assert_eq!(view.get(2).unwrap(), 3.5);
//! ```

use core::fmt;
use core::marker::PhantomData;

use listof_values::list::Iter as ListIter;
use listof_values::{IntoValue, List, Slot, Tag, TextCell, TypeTag, Value, ValueError, as_type};

use crate::element::{Element, read};
use crate::proxy;
use crate::{Error, Result};

/// How strictly a read checks the slot's run-time tag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AccessMode {
    /// Convert whatever the slot holds; fail only if conversion fails.
    #[default]
    Lenient,
    /// Fail with [`Error::TagMismatch`] unless the slot's tag is `T`'s tag.
    /// Generic element types accept every tag.
    Strict,
}

/// A key into a list: a position or a name.
pub trait ListKey: Copy + fmt::Debug {
    /// Read-side lookup, delegated to the list.
    fn fetch(self, list: &List) -> core::result::Result<Value, ValueError>;

    /// Write-side lookup, producing a slot to assign through.
    fn locate<'l>(self, list: &'l List) -> Result<Slot<'l>>;
}

impl ListKey for usize {
    fn fetch(self, list: &List) -> core::result::Result<Value, ValueError> {
        list.get(self)
    }

    fn locate<'l>(self, list: &'l List) -> Result<Slot<'l>> {
        Ok(list.slot(self))
    }
}

impl ListKey for &str {
    fn fetch(self, list: &List) -> core::result::Result<Value, ValueError> {
        list.get_by_name(self)
    }

    fn locate<'l>(self, list: &'l List) -> Result<Slot<'l>> {
        proxy::slot_named(list, self)
    }
}

/// A statically typed view over a shared dynamic list.
pub struct ListOf<T> {
    list: List,
    _marker: PhantomData<fn() -> T>,
}

// --- Manual Clone/Debug/PartialEq to avoid bounds on T ---

impl<T> Clone for ListOf<T> {
    fn clone(&self) -> Self {
        ListOf::from_list(self.list.clone())
    }
}

impl<T> fmt::Debug for ListOf<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListOf")
            .field("list", &self.list)
            .field("element_type", &core::any::type_name::<T>())
            .finish()
    }
}

impl<T> PartialEq for ListOf<T> {
    fn eq(&self, other: &Self) -> bool {
        self.list == other.list
    }
}

impl<T> Default for ListOf<T> {
    fn default() -> Self {
        ListOf::from_list(List::new())
    }
}

// --- Construction and conversion ---

impl<T> ListOf<T> {
    /// A view over a new empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// A view over `list`. The handle is shared, not copied.
    pub fn from_list(list: List) -> Self {
        ListOf {
            list,
            _marker: PhantomData,
        }
    }

    /// A view over whatever list `value` converts to.
    pub fn try_from_value(value: &Value) -> Result<Self> {
        Ok(Self::from_list(as_type::<List>(value)?))
    }

    /// Point this view at the list `value` converts to.
    ///
    /// Assigning another `ListOf` (of any element type) or a `List` shares its
    /// handle. On failure the view is left unchanged.
    pub fn assign_from(&mut self, value: impl IntoValue) -> Result<()> {
        self.list = as_type::<List>(&value.into_value())?;
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn names(&self) -> Option<Vec<TextCell>> {
        self.list.names()
    }

    pub fn as_list(&self) -> &List {
        &self.list
    }

    pub fn into_list(self) -> List {
        self.list
    }

    pub fn to_value(&self) -> Value {
        Value::List(self.list.clone())
    }
}

// --- Typed access ---

impl<T: Element> ListOf<T> {
    /// The element at `key` (an index or a name) as `T`.
    pub fn get<K: ListKey>(&self, key: K) -> Result<T> {
        self.get_with(key, AccessMode::default())
    }

    /// Like [`get`](Self::get), with an explicit [`AccessMode`].
    pub fn get_with<K: ListKey>(&self, key: K, mode: AccessMode) -> Result<T> {
        let value = key.fetch(&self.list)?;
        if mode == AccessMode::Strict {
            check_tag::<T, K>(key, &value)?;
        }
        read::<T>(value)
    }

    /// Iterate over the elements as `T`, in insertion order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.list.iter(),
            _marker: PhantomData,
        }
    }
}

fn check_tag<T: Element, K: ListKey>(key: K, value: &Value) -> Result<()> {
    let expected = <T::Tag as Tag>::TAG;
    let found = value.tag();
    if expected == TypeTag::Generic || expected == found {
        return Ok(());
    }
    tracing::debug!(?key, %expected, %found, "strict read rejected element");
    Err(Error::TagMismatch { expected, found })
}

/// Iterator over a [`ListOf`], yielding each element converted to `T`.
pub struct Iter<'a, T> {
    inner: ListIter,
    _marker: PhantomData<(&'a List, fn() -> T)>,
}

impl<T: Element> Iterator for Iter<'_, T> {
    type Item = Result<T>;

    fn next(&mut self) -> Option<Result<T>> {
        self.inner.next().map(read::<T>)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, T: Element> IntoIterator for &'a ListOf<T> {
    type Item = Result<T>;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T> From<List> for ListOf<T> {
    fn from(list: List) -> Self {
        ListOf::from_list(list)
    }
}

impl<T> TryFrom<Value> for ListOf<T> {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        ListOf::try_from_value(&value)
    }
}

impl<T> From<ListOf<T>> for List {
    fn from(view: ListOf<T>) -> Self {
        view.list
    }
}

impl<T> From<ListOf<T>> for Value {
    fn from(view: ListOf<T>) -> Self {
        Value::List(view.list)
    }
}

impl<T> IntoValue for ListOf<T> {
    fn into_value(self) -> Value {
        Value::List(self.list)
    }
}

impl<T> IntoValue for &ListOf<T> {
    fn into_value(self) -> Value {
        self.to_value()
    }
}

impl<T> AsRef<List> for ListOf<T> {
    fn as_ref(&self) -> &List {
        &self.list
    }
}

#[cfg(test)]
#[path = "list_of_test.rs"]
mod list_of_test;
