//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check path shape (leading slash, no query or fragment)
//! - Check paths are reachable through location normalization
//! - Detect conflicting routes
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: RegistryConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::collections::HashMap;

use thiserror::Error;

use crate::config::schema::RegistryConfig;
use crate::navigation::normalize_location;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// A single semantic problem in a route table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("route table is empty")]
    NoRoutes,

    #[error("routes[{index}]: path {path:?} must start with '/'")]
    MissingLeadingSlash { index: usize, path: String },

    #[error("routes[{index}]: path {path:?} must not contain a query or fragment")]
    QueryOrFragment { index: usize, path: String },

    #[error("routes[{index}]: path {path:?} normalizes to {normalized:?} and can never be navigated to")]
    NonCanonicalPath {
        index: usize,
        path: String,
        normalized: String,
    },

    #[error("routes[{index}]: page name is empty")]
    EmptyPage { index: usize },

    #[error("routes[{second}]: path {path:?} already registered by routes[{first}]")]
    DuplicatePath {
        path: String,
        first: usize,
        second: usize,
    },

    #[error("not_found_page is empty")]
    EmptyFallback,

    #[error("unknown log level {0:?}")]
    UnknownLogLevel(String),
}

/// Validate a configuration, collecting every error.
pub fn validate_config(config: &RegistryConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.routes.is_empty() {
        errors.push(ValidationError::NoRoutes);
    }

    let mut seen: HashMap<&str, usize> = HashMap::new();
    for (index, route) in config.routes.iter().enumerate() {
        if !route.path.starts_with('/') {
            errors.push(ValidationError::MissingLeadingSlash {
                index,
                path: route.path.clone(),
            });
        }
        if route.path.contains(['?', '#']) {
            errors.push(ValidationError::QueryOrFragment {
                index,
                path: route.path.clone(),
            });
        } else if route.path.starts_with('/') {
            // Routes must be fixed points of normalization, or navigation never reaches them.
            let normalized = normalize_location(&route.path).unwrap_or_default();
            if normalized != route.path {
                errors.push(ValidationError::NonCanonicalPath {
                    index,
                    path: route.path.clone(),
                    normalized,
                });
            }
        }
        if route.page.trim().is_empty() {
            errors.push(ValidationError::EmptyPage { index });
        }
        if let Some(&first) = seen.get(route.path.as_str()) {
            errors.push(ValidationError::DuplicatePath {
                path: route.path.clone(),
                first,
                second: index,
            });
        } else {
            seen.insert(route.path.as_str(), index);
        }
    }

    if matches!(config.not_found_page.as_deref(), Some(page) if page.trim().is_empty()) {
        errors.push(ValidationError::EmptyFallback);
    }

    let level = config.observability.log_level.to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ValidationError::UnknownLogLevel(
            config.observability.log_level.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
