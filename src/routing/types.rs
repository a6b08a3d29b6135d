//! Route types and error definitions.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Name of a page component (e.g. `LoginPage`).
///
/// Opaque to the registry; the rendering layer decides what it means.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
#[serde(transparent)]
pub struct PageId(String);

impl PageId {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PageId {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for PageId {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// A literal path mapped to a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route<P = PageId> {
    path: String,
    page: P,
}

impl<P> Route<P> {
    pub fn new(path: impl Into<String>, page: impl Into<P>) -> Self {
        Self {
            path: path.into(),
            page: page.into(),
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn page(&self) -> &P {
        &self.page
    }
}

/// Errors raised by route registration and resolution.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoutingError {
    /// Two routes share the same path. Raised at construction.
    #[error("Duplicate route path: {path}")]
    DuplicatePath { path: String },

    /// No route's path equals the requested path.
    #[error("No route matches path: {path}")]
    NotFound { path: String },
}

impl RoutingError {
    /// True for construction-time failures the application must not start with.
    pub fn is_configuration(&self) -> bool {
        matches!(self, RoutingError::DuplicatePath { .. })
    }
}

/// Result type for routing operations.
pub type RoutingResult<T> = Result<T, RoutingError>;
