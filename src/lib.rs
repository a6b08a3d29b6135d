//! Page route registry.
//!
//! Maps literal URL paths to page identifiers for a client-side application.
//! The registry is built once at startup, never mutated, and shared by
//! reference with whatever navigates or renders.

pub mod config;
pub mod navigation;
pub mod observability;
pub mod routing;

pub use config::RegistryConfig;
pub use navigation::{Navigation, Navigator};
pub use routing::{PageId, Registry, Route, RoutingError};
