//! The graph interface: the abstract [`Node`] contract the rest of the
//! system consumes, and its three concrete variants.

mod dir;
mod file;
mod part;

pub use dir::Dir;
pub use file::File;
pub use part::Part;

use crate::key::Key;
use std::collections::HashMap;

/// A polymorphic entity in the content-addressed DAG.
///
/// Represented as a tagged variant rather than a trait object: the scanner
/// dispatches on `kind` by matching rather than through dynamic dispatch, to
/// keep the hot hashing path free of indirection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Part(Part),
    File(File),
    Dir(Dir),
}

impl Node {
    /// The node's content digest, stable once computed.
    pub fn key(&self) -> &Key {
        match self {
            Node::Part(p) => p.key(),
            Node::File(f) => f.key(),
            Node::Dir(d) => d.key(),
        }
    }

    /// Ordered sequence of child keys, possibly empty.
    pub fn links(&self) -> &[Key] {
        match self {
            Node::Part(p) => p.sub_keys(),
            Node::File(f) => f.part_keys(),
            Node::Dir(d) => d.item_keys(),
        }
    }

    /// Optional payload bytes. Reserved for future inline small-data nodes;
    /// always empty for the variants this implementation produces.
    pub fn data(&self) -> &[u8] {
        &[]
    }

    /// Reserved string metadata map; always empty today.
    pub fn metadata(&self) -> HashMap<String, String> {
        HashMap::new()
    }
}

impl From<Part> for Node {
    fn from(value: Part) -> Self {
        Node::Part(value)
    }
}

impl From<File> for Node {
    fn from(value: File) -> Self {
        Node::File(value)
    }
}

impl From<Dir> for Node {
    fn from(value: Dir) -> Self {
        Node::Dir(value)
    }
}
