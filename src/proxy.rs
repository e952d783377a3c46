//! Write access into a [`ListOf`].
//!
//! Writes never go through the view itself. [`lhs`] hands out a
//! [`ListOfProxy`] bound to the view's list, and the proxy hands out
//! [`Slot`]s. Assigning through a slot replaces the whole element in the shared
//! list, so every view over that list observes it.
//!
//! Index and name misses differ on purpose. An index is not checked until the
//! slot is written, and then fails with the list's own out-of-range error. A
//! name is resolved on the spot, and a miss is [`Error::NoSuchName`].

use core::marker::PhantomData;

use listof_values::{IntoValue, List, Slot};

use crate::convert::{Generic, Strategy};
use crate::list_of::ListKey;
use crate::{Error, ListOf, Result};

/// Assignment target for a [`ListOf`]. See [`lhs`].
pub struct ListOfProxy<'a, T> {
    list: &'a List,
    _marker: PhantomData<fn() -> T>,
}

/// Open `view` for writing.
///
/// ```
/// use listof::{ListOf, lhs};
/// use listof::values::List;
///
/// let view = ListOf::<i32>::from_list(List::with_names([1.into(), 2.into()], ["x", "y"]).unwrap());
/// lhs(&view).set("y", 20).unwrap();
/// assert_eq!(view.get(1).unwrap(), 20);
/// assert!(lhs(&view).set("z", 0).is_err());
/// ```
pub fn lhs<T>(view: &ListOf<T>) -> ListOfProxy<'_, T> {
    ListOfProxy {
        list: view.as_list(),
        _marker: PhantomData,
    }
}

impl<'a, T> ListOfProxy<'a, T> {
    /// Slot at position `index`. Bounds are checked when the slot is written.
    pub fn at(&self, index: usize) -> Slot<'a> {
        self.list.slot(index)
    }

    /// Slot of the first element named `name`.
    pub fn name(&self, name: &str) -> Result<Slot<'a>> {
        slot_named(self.list, name)
    }

    /// Replace the element at `key` with `value` wrapped into dynamic form.
    pub fn set<K: ListKey, U: IntoValue>(&self, key: K, value: U) -> Result<()> {
        let slot = key.locate(self.list)?;
        slot.set(Generic::get(value)?)?;
        Ok(())
    }

    /// One slot per element, in order.
    pub fn slots(&self) -> impl Iterator<Item = Slot<'a>> + use<'a, T> {
        let list = self.list;
        (0..list.len()).map(move |index| list.slot(index))
    }
}

pub(crate) fn slot_named<'l>(list: &'l List, name: &str) -> Result<Slot<'l>> {
    match list.position(name) {
        Some(index) => Ok(list.slot(index)),
        None => {
            tracing::debug!(name, "write to unknown name");
            Err(Error::NoSuchName { name: name.into() })
        }
    }
}

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;
