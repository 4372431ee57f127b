//! A configured remote endpoint content can eventually be pushed to.
//!
//! Only construction and the config round-trip are implemented here; actual
//! transfer is out of scope for this revision (see the `pull` command's
//! stub), so there is no network client behind [`Bucket`] yet.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("unsupported bucket uri scheme in '{0}'")]
    UnsupportedScheme(String),
}

/// A remote endpoint a project's content can be synced to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bucket {
    endpoint: String,
}

impl Bucket {
    /// Validates and wraps a bucket URI. No connection is attempted: this
    /// only checks that the URI has a scheme this implementation recognizes.
    pub fn create(uri: &str) -> Result<Self, Error> {
        if !uri.contains("://") {
            return Err(Error::UnsupportedScheme(uri.to_string()));
        }
        Ok(Self {
            endpoint: uri.to_string(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}
