//! Mapping primitives over a [`List`].
//!
//! The callable sees every element exactly once, in order. The first error
//! it returns stops the walk and is handed back unchanged.

use crate::{IntoValue, List, Value};

/// Map `f` over `list` into a new list of the same length and names.
pub fn lapply<R, E, F>(list: &List, mut f: F) -> Result<List, E>
where
    R: IntoValue,
    F: FnMut(Value) -> Result<R, E>,
{
    let names = list.names();
    let mut out = Vec::with_capacity(list.len());
    for (index, value) in list.iter().enumerate() {
        tracing::trace!(index, tag = %value.tag(), "lapply");
        out.push(f(value)?.into_value());
    }
    // `f` may have grown or shrunk the list; keep names only if they still line up.
    let names = names.filter(|names| names.len() == out.len());
    Ok(List::from_parts(out, names))
}

/// Map `f` over `list`, collecting the results into `C`.
pub fn sapply<R, C, E, F>(list: &List, mut f: F) -> Result<C, E>
where
    C: FromIterator<R>,
    F: FnMut(Value) -> Result<R, E>,
{
    list.iter()
        .enumerate()
        .map(|(index, value)| {
            tracing::trace!(index, tag = %value.tag(), "sapply");
            f(value)
        })
        .collect()
}
