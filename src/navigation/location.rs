//! Location normalization.
//!
//! Turns whatever the history collaborator hands over (`https://app/login?x#y`,
//! `/login?x`, `login`) into the bare path the registry matches on.

use thiserror::Error;
use percent_encoding::percent_decode_str;
use url::{ParseError, Url};

use crate::routing::RoutingError;

/// Base used to resolve relative locations.
const LOCAL_BASE: &str = "http://localhost/";

/// Errors that can occur while navigating.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    /// The location could not be turned into a path.
    #[error("Invalid location {location:?}: {reason}")]
    InvalidLocation { location: String, reason: String },

    #[error(transparent)]
    Routing(#[from] RoutingError),
}

/// Normalize a raw location into a registry path.
///
/// Query and fragment are dropped, dot segments are collapsed and the result
/// always starts with `/`. The path comes back percent-decoded, so `/my%20page`
/// and `/my page` both normalize to `/my page`.
pub fn normalize_location(raw: &str) -> Result<String, NavigationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(invalid(raw, "empty location"));
    }

    let url = match Url::parse(trimmed) {
        Ok(url) => url,
        Err(ParseError::RelativeUrlWithoutBase) => {
            let base = Url::parse(LOCAL_BASE).map_err(|e| invalid(raw, e))?;
            base.join(trimmed).map_err(|e| invalid(raw, e))?
        }
        Err(e) => return Err(invalid(raw, e)),
    };

    if url.cannot_be_a_base() {
        return Err(invalid(raw, "location has no path hierarchy"));
    }

    percent_decode_str(url.path())
        .decode_utf8()
        .map(|path| path.into_owned())
        .map_err(|e| invalid(raw, e))
}

fn invalid(location: &str, reason: impl ToString) -> NavigationError {
    NavigationError::InvalidLocation {
        location: location.to_string(),
        reason: reason.to_string(),
    }
}
