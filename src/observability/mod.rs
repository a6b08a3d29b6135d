//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → logging.rs (structured log events)
//!     → metrics.rs (resolution counters, route gauge)
//!
//! Consumers:
//!     → stdout/stderr via tracing-subscriber
//!     → whatever metrics recorder the embedding application installs
//! ```
//!
//! # Design Decisions
//! - Structured fields on every event (path, page, outcome)
//! - Metrics go through the `metrics` facade; no recorder means no cost
//! - The binary owns subscriber setup, the library only emits

pub mod logging;
pub mod metrics;
