use core::fmt;
use core::ops::Deref;

use string_cache::DefaultAtom;

/// An interned, immutable piece of text.
///
/// Equal texts share one allocation, so cloning and comparing cells is cheap.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct TextCell(DefaultAtom);

static_assertions::assert_eq_size!(TextCell, u64);

impl TextCell {
    pub fn new(text: &str) -> Self {
        TextCell(DefaultAtom::from(text))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Deref for TextCell {
    type Target = str;

    fn deref(&self) -> &str {
        self.as_str()
    }
}

impl AsRef<str> for TextCell {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl From<&str> for TextCell {
    fn from(text: &str) -> Self {
        TextCell::new(text)
    }
}

impl From<String> for TextCell {
    fn from(text: String) -> Self {
        TextCell(DefaultAtom::from(text))
    }
}

impl From<char> for TextCell {
    fn from(c: char) -> Self {
        TextCell::new(c.encode_utf8(&mut [0; 4]))
    }
}

impl PartialEq<str> for TextCell {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for TextCell {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl fmt::Debug for TextCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_str(), f)
    }
}

impl fmt::Display for TextCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
