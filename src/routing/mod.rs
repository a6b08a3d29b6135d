//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Route Compilation (at startup):
//!     RouteConfig[] / RegistryBuilder
//!     → registry.rs (reject duplicate paths)
//!     → Index paths in a HashMap
//!     → Freeze as immutable Registry
//!
//! Resolution:
//!     normalized path
//!     → registry.rs (exact-match lookup)
//!     → Return: page identifier or NotFound
//! ```
//!
//! # Design Decisions
//! - Routes compiled at startup, immutable at runtime
//! - Exact literal matching only, no patterns
//! - Deterministic: same input always resolves to the same page
//! - Explicit NotFound rather than silent default

pub mod registry;
pub mod types;

pub use registry::{Registry, RegistryBuilder};
pub use types::{PageId, Route, RoutingError, RoutingResult};
