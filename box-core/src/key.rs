use data_encoding::HEXLOWER;
use sha1::{Digest, Sha1};
use thiserror::Error;

/// Width, in bytes, of every [`Key`] produced by this implementation.
///
/// The scanner fixes the leaf/interior hash algorithm to SHA-1 for
/// wire-stability with the reference fixtures. A SHA-256 variant would only
/// need to change this constant and the hashing call sites below, not any of
/// the tree-shape logic in the chunker or assembler.
pub const KEY_LEN: usize = 20;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("invalid key length: expected {KEY_LEN}, got {0}")]
    InvalidLen(usize),
}

/// The content digest of a [`Node`](crate::nodes::Node). Keys are compared
/// byte-wise and are the universal reference type linking nodes together into
/// a DAG.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Key([u8; KEY_LEN]);

impl Key {
    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.0
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.0[..]
    }
}

impl TryFrom<&[u8]> for Key {
    type Error = Error;

    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        if value.len() != KEY_LEN {
            return Err(Error::InvalidLen(value.len()));
        }
        let mut buf = [0u8; KEY_LEN];
        buf.copy_from_slice(value);
        Ok(Self(buf))
    }
}

impl TryFrom<Vec<u8>> for Key {
    type Error = Error;

    fn try_from(value: Vec<u8>) -> Result<Self, Self::Error> {
        Self::try_from(value.as_slice())
    }
}

impl From<[u8; KEY_LEN]> for Key {
    fn from(value: [u8; KEY_LEN]) -> Self {
        Self(value)
    }
}

impl From<Key> for Vec<u8> {
    fn from(value: Key) -> Self {
        value.0.to_vec()
    }
}

impl std::fmt::Display for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", HEXLOWER.encode(&self.0))
    }
}

impl std::fmt::Debug for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Key({})", HEXLOWER.encode(&self.0))
    }
}

/// Returns the SHA-1 digest of `data` as a [`Key`].
pub fn hash(data: &[u8]) -> Key {
    let mut hasher = Sha1::new();
    hasher.update(data);
    Key(hasher.finalize().into())
}

/// A running SHA-1 hasher that finalizes into a [`Key`].
///
/// This is a thin wrapper so call sites (the chunker, the assembler) never
/// reach for `sha1::Sha1` directly, keeping the choice of algorithm
/// localized to this module.
#[derive(Clone, Default)]
pub struct Hasher(Sha1);

impl Hasher {
    pub fn new() -> Self {
        Self(Sha1::new())
    }

    pub fn update(&mut self, data: &[u8]) {
        self.0.update(data);
    }

    pub fn finalize(self) -> Key {
        Key(self.0.finalize().into())
    }

    pub fn reset(&mut self) {
        Digest::reset(&mut self.0);
    }
}
