//! Navigation subsystem.
//!
//! # Data Flow
//! ```text
//! Raw location (URL or path, from history/CLI)
//!     → location.rs (strip query & fragment, ensure leading slash)
//!     → navigator.rs (registry lookup via shared Arc<Registry>)
//!     → Return: Matched(page) | Fallback(not-found page) | NotFound
//! ```
//!
//! # Design Decisions
//! - No global router: the composition root builds the registry and hands it
//!   to a Navigator
//! - The fallback page lives here, not in the registry
//! - Normalization is done once, before lookup

pub mod location;
pub mod navigator;

pub use location::{normalize_location, NavigationError};
pub use navigator::{Navigation, Navigator};
