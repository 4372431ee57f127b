use crate::key::Key;

/// A directory, represented as an ordered list of item keys (each a
/// [`File`](super::File) or subdirectory `Dir`).
///
/// Items appear in lexicographically sorted name order of the underlying
/// directory entries, which is what gives the digest cross-run stability —
/// note that names themselves are *not* hashed, only the child keys are
/// (see `DESIGN.md`, Open Question 3).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dir {
    key: Key,
    items: Vec<Key>,
}

impl Dir {
    pub fn new(key: Key, items: Vec<Key>) -> Self {
        Self { key, items }
    }

    pub fn key(&self) -> &Key {
        &self.key
    }

    pub fn item_keys(&self) -> &[Key] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
