//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! routes file (TOML) or built-in default table
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → RegistryConfig (validated, immutable)
//!     → build_registry() → Registry shared via Arc
//! ```
//!
//! # Design Decisions
//! - Config is read once at startup; there is no runtime reload
//! - All sections have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::{ObservabilityConfig, RegistryConfig, RouteConfig};
pub use validation::{validate_config, ValidationError};
