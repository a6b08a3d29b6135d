//! Metrics collection.
//!
//! # Metrics
//! - `route_resolutions_total` (counter): resolutions by outcome
//!   (`matched`, `fallback`, `not_found`)
//! - `route_registry_routes` (gauge): routes in the active registry

pub const RESOLUTIONS_TOTAL: &str = "route_resolutions_total";
pub const REGISTRY_ROUTES: &str = "route_registry_routes";

/// Outcome label for a resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Matched,
    Fallback,
    NotFound,
}

impl Outcome {
    pub fn as_str(self) -> &'static str {
        match self {
            Outcome::Matched => "matched",
            Outcome::Fallback => "fallback",
            Outcome::NotFound => "not_found",
        }
    }
}

pub fn record_resolution(outcome: Outcome) {
    metrics::counter!(RESOLUTIONS_TOTAL, "outcome" => outcome.as_str()).increment(1);
}

pub fn record_registry_size(routes: usize) {
    metrics::gauge!(REGISTRY_ROUTES).set(routes as f64);
}
