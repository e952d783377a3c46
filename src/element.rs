//! The table binding native element types to type tags.

use core::any::type_name;

use listof_values::{
    DoubleTag, GenericTag, IntegerTag, IntoValue, List, LogicalTag, Tag, TextCell, TextTag,
    TypeTag, Value, as_type,
};

use crate::convert::{self, TagConverter};
use crate::{ListOf, Result};

/// A native type that can be an element of a [`ListOf`].
///
/// `Tag` is the element's storage category. Reading a slot first brings the
/// slot's value to `Tag::Storage` with the tag's conversion strategy, then
/// [`from_storage`](Element::from_storage) finishes the job.
pub trait Element: IntoValue + Sized {
    type Tag: TagConverter;

    fn from_storage(storage: <Self::Tag as Tag>::Storage) -> Result<Self>;
}

/// Read a slot value as `T`.
pub(crate) fn read<T: Element>(value: Value) -> Result<T> {
    T::from_storage(convert::convert::<T::Tag>(value)?)
}

fn not_available<T>(tag: TypeTag) -> crate::Error {
    crate::Error::NotAvailable {
        tag,
        to: type_name::<T>(),
    }
}

impl Element for f64 {
    type Tag = DoubleTag;

    fn from_storage(storage: f64) -> Result<Self> {
        Ok(storage)
    }
}

impl Element for Option<i32> {
    type Tag = IntegerTag;

    fn from_storage(storage: Option<i32>) -> Result<Self> {
        Ok(storage)
    }
}

impl Element for i32 {
    type Tag = IntegerTag;

    fn from_storage(storage: Option<i32>) -> Result<Self> {
        storage.ok_or_else(|| not_available::<Self>(TypeTag::Integer))
    }
}

impl Element for Option<bool> {
    type Tag = LogicalTag;

    fn from_storage(storage: Option<bool>) -> Result<Self> {
        Ok(storage)
    }
}

impl Element for bool {
    type Tag = LogicalTag;

    fn from_storage(storage: Option<bool>) -> Result<Self> {
        storage.ok_or_else(|| not_available::<Self>(TypeTag::Logical))
    }
}

impl Element for TextCell {
    type Tag = TextTag;

    fn from_storage(storage: TextCell) -> Result<Self> {
        Ok(storage)
    }
}

impl Element for String {
    type Tag = TextTag;

    fn from_storage(storage: TextCell) -> Result<Self> {
        Ok(storage.as_str().to_owned())
    }
}

impl Element for Value {
    type Tag = GenericTag;

    fn from_storage(storage: Value) -> Result<Self> {
        Ok(storage)
    }
}

impl Element for List {
    type Tag = GenericTag;

    fn from_storage(storage: Value) -> Result<Self> {
        Ok(as_type::<List>(&storage)?)
    }
}

/// Nested views share the inner list.
impl<T: Element> Element for ListOf<T> {
    type Tag = GenericTag;

    fn from_storage(storage: Value) -> Result<Self> {
        Ok(ListOf::from_list(as_type::<List>(&storage)?))
    }
}
