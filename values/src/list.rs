//! The shared dynamic list.
//!
//! A [`List`] is a handle: `Rc<RefCell<..>>` over the values and their
//! optional names. There is no deep copy anywhere in this module; cloning the
//! handle aliases the same storage.
//!
//! Lists are single-threaded (`!Send`). A list that contains itself is never
//! freed. Comparing or debug-printing a cyclic list walks the cycle without
//! end and overflows the stack; only comparing a handle with itself (or
//! another handle to the same storage) is safe, because equality checks
//! identity first.

use core::fmt;
use std::cell::RefCell;
use std::rc::Rc;

use crate::{IntoValue, TextCell, Value, ValueError};

#[derive(Default)]
struct ListData {
    values: Vec<Value>,
    /// Parallel to `values` when present.
    names: Option<Vec<TextCell>>,
}

/// Shared handle to an ordered sequence of dynamically typed values.
#[derive(Clone, Default)]
pub struct List {
    data: Rc<RefCell<ListData>>,
}

impl List {
    /// An empty, unnamed list.
    pub fn new() -> Self {
        Self::default()
    }

    /// An unnamed list holding `values` in order.
    pub fn from_values(values: impl IntoIterator<Item = Value>) -> Self {
        Self::from_parts(values.into_iter().collect(), None)
    }

    /// A list with one name per value.
    pub fn with_names<N>(
        values: impl IntoIterator<Item = Value>,
        names: impl IntoIterator<Item = N>,
    ) -> Result<Self, ValueError>
    where
        N: Into<TextCell>,
    {
        let list = Self::from_values(values);
        list.set_names(Some(names.into_iter().map(Into::into).collect()))?;
        Ok(list)
    }

    pub(crate) fn from_parts(values: Vec<Value>, names: Option<Vec<TextCell>>) -> Self {
        debug_assert!(names.as_ref().is_none_or(|n| n.len() == values.len()));
        List {
            data: Rc::new(RefCell::new(ListData { values, names })),
        }
    }

    pub fn len(&self) -> usize {
        self.data.borrow().values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether both handles point at the same storage.
    pub fn ptr_eq(&self, other: &List) -> bool {
        Rc::ptr_eq(&self.data, &other.data)
    }

    /// A copy of the name metadata, if the list has any.
    pub fn names(&self) -> Option<Vec<TextCell>> {
        self.data.borrow().names.clone()
    }

    /// Replace the name metadata. `None` drops it.
    pub fn set_names(&self, names: Option<Vec<TextCell>>) -> Result<(), ValueError> {
        let mut data = self.data.borrow_mut();
        if let Some(names) = &names {
            if names.len() != data.values.len() {
                return Err(ValueError::NamesLength {
                    names: names.len(),
                    values: data.values.len(),
                });
            }
        }
        data.names = names;
        Ok(())
    }

    pub fn name_at(&self, index: usize) -> Option<TextCell> {
        self.data.borrow().names.as_ref()?.get(index).cloned()
    }

    /// Position of the first element named `name`.
    pub fn position(&self, name: &str) -> Option<usize> {
        let data = self.data.borrow();
        data.names.as_ref()?.iter().position(|n| n.as_str() == name)
    }

    /// The element at `index`.
    pub fn get(&self, index: usize) -> Result<Value, ValueError> {
        let data = self.data.borrow();
        data.values
            .get(index)
            .cloned()
            .ok_or(ValueError::OutOfRange {
                index,
                len: data.values.len(),
            })
    }

    /// The first element named `name`.
    pub fn get_by_name(&self, name: &str) -> Result<Value, ValueError> {
        match self.position(name) {
            Some(index) => self.get(index),
            None => Err(ValueError::NameNotFound { name: name.into() }),
        }
    }

    /// A write handle for position `index`.
    ///
    /// The index is not checked here; [`Slot::set`] checks it.
    pub fn slot(&self, index: usize) -> Slot<'_> {
        Slot { list: self, index }
    }

    /// Append an element. Named lists get an empty name for it.
    pub fn push(&self, value: impl IntoValue) {
        let mut data = self.data.borrow_mut();
        data.values.push(value.into_value());
        if let Some(names) = &mut data.names {
            names.push(TextCell::new(""));
        }
    }

    /// Append a named element. Earlier unnamed elements get empty names.
    pub fn push_named(&self, name: impl Into<TextCell>, value: impl IntoValue) {
        let mut data = self.data.borrow_mut();
        let len = data.values.len();
        data.names
            .get_or_insert_with(|| vec![TextCell::new(""); len])
            .push(name.into());
        data.values.push(value.into_value());
    }

    /// Iterate over copies of the elements in insertion order.
    pub fn iter(&self) -> Iter {
        Iter {
            list: self.clone(),
            position: 0,
        }
    }

    pub fn to_vec(&self) -> Vec<Value> {
        self.data.borrow().values.clone()
    }
}

/// Lists compare by contents and names, not by identity.
///
/// Handles to the same storage are equal without looking at the contents.
/// Two distinct cyclic lists recurse until the stack overflows.
impl PartialEq for List {
    fn eq(&self, other: &Self) -> bool {
        if self.ptr_eq(other) {
            return true;
        }
        let (a, b) = (self.data.borrow(), other.data.borrow());
        a.values == b.values && a.names == b.names
    }
}

/// Does not detect cycles; see the module docs.
impl fmt::Debug for List {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let data = self.data.borrow();
        match &data.names {
            Some(names) => f
                .debug_map()
                .entries(names.iter().zip(data.values.iter()))
                .finish(),
            None => f.debug_list().entries(data.values.iter()).finish(),
        }
    }
}

impl FromIterator<Value> for List {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        List::from_values(iter)
    }
}

impl<'a> IntoIterator for &'a List {
    type Item = Value;
    type IntoIter = Iter;

    fn into_iter(self) -> Iter {
        self.iter()
    }
}

/// Forward iterator over a [`List`].
///
/// Holds its own handle and reads one element per step, so growing or
/// shrinking the list while iterating changes what is yielded.
#[derive(Debug, Clone)]
pub struct Iter {
    list: List,
    position: usize,
}

impl Iterator for Iter {
    type Item = Value;

    fn next(&mut self) -> Option<Value> {
        let value = self.list.data.borrow().values.get(self.position).cloned()?;
        self.position += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.list.len().saturating_sub(self.position);
        (remaining, Some(remaining))
    }
}

/// A position-bound write handle into a [`List`].
///
/// Obtained from [`List::slot`]. Writing replaces the whole element.
pub struct Slot<'a> {
    list: &'a List,
    index: usize,
}

impl<'a> Slot<'a> {
    pub fn index(&self) -> usize {
        self.index
    }

    /// The current value at this position.
    pub fn get(&self) -> Result<Value, ValueError> {
        self.list.get(self.index)
    }

    /// Replace the value at this position.
    pub fn set(&self, value: Value) -> Result<(), ValueError> {
        let mut data = self.list.data.borrow_mut();
        let len = data.values.len();
        match data.values.get_mut(self.index) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(ValueError::OutOfRange {
                index: self.index,
                len,
            }),
        }
    }
}

impl fmt::Debug for Slot<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Slot").field("index", &self.index).finish()
    }
}
