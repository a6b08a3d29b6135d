//! Path dispatch with a not-found fallback.
//!
//! # Responsibilities
//! - Hold the shared, immutable registry
//! - Resolve paths and apply the fallback page on miss
//! - Record resolution outcomes
//!
//! # Design Decisions
//! - Cloning a Navigator shares the registry (Arc), never copies routes
//! - Without a fallback, NotFound propagates to the caller

use std::sync::Arc;

use crate::navigation::location::{normalize_location, NavigationError};
use crate::observability::metrics::{self, Outcome};
use crate::routing::{PageId, Registry, RoutingError, RoutingResult};

/// Result of a successful navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation<'a, P> {
    /// The path matched a registered route.
    Matched(&'a P),
    /// No route matched; the fallback page was selected.
    Fallback(&'a P),
}

impl<'a, P> Navigation<'a, P> {
    pub fn page(&self) -> &'a P {
        match *self {
            Navigation::Matched(page) | Navigation::Fallback(page) => page,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Navigation::Fallback(_))
    }
}

/// Resolves navigation requests against an injected registry.
#[derive(Debug, Clone)]
pub struct Navigator<P = PageId> {
    registry: Arc<Registry<P>>,
    fallback: Option<P>,
}

impl<P> Navigator<P> {
    pub fn new(registry: Arc<Registry<P>>) -> Self {
        metrics::record_registry_size(registry.len());
        Self {
            registry,
            fallback: None,
        }
    }

    /// Page to show when no route matches.
    pub fn with_fallback(mut self, page: impl Into<P>) -> Self {
        self.fallback = Some(page.into());
        self
    }

    pub fn registry(&self) -> &Arc<Registry<P>> {
        &self.registry
    }

    pub fn fallback(&self) -> Option<&P> {
        self.fallback.as_ref()
    }

    /// Navigate to an already-normalized path.
    pub fn navigate(&self, path: &str) -> RoutingResult<Navigation<'_, P>> {
        let err = match self.registry.resolve(path) {
            Ok(page) => {
                tracing::debug!(path = %path, "Route matched");
                metrics::record_resolution(Outcome::Matched);
                return Ok(Navigation::Matched(page));
            }
            Err(e) => e,
        };

        if let (RoutingError::NotFound { .. }, Some(page)) = (&err, self.fallback.as_ref()) {
            tracing::warn!(path = %path, "No route matched, using fallback page");
            metrics::record_resolution(Outcome::Fallback);
            return Ok(Navigation::Fallback(page));
        }

        tracing::warn!(path = %path, error = %err, "Navigation failed");
        metrics::record_resolution(Outcome::NotFound);
        Err(err)
    }

    /// Normalize a raw location, then navigate to it.
    pub fn navigate_location(&self, raw: &str) -> Result<Navigation<'_, P>, NavigationError> {
        let path = normalize_location(raw)?;
        Ok(self.navigate(&path)?)
    }
}
