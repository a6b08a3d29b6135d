//! Configuration schema definitions.
//!
//! This module defines the route table file layout.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

use crate::routing::{PageId, Registry, Route, RoutingResult};

/// Root configuration for the route registry.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Route definitions mapping paths to pages.
    pub routes: Vec<RouteConfig>,

    /// Page shown when no route matches.
    pub not_found_page: Option<String>,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            routes: default_routes(),
            not_found_page: Some("NotFoundPage".to_string()),
            observability: ObservabilityConfig::default(),
        }
    }
}

impl RegistryConfig {
    /// Compile the route table into an immutable registry.
    pub fn build_registry(&self) -> RoutingResult<Registry<PageId>> {
        Registry::new(
            self.routes
                .iter()
                .map(|r| Route::new(r.path.clone(), r.page.clone())),
        )
    }

    /// The fallback page, if one is configured.
    pub fn fallback_page(&self) -> Option<PageId> {
        self.not_found_page.as_deref().map(PageId::from)
    }
}

/// A single path-to-page mapping.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RouteConfig {
    /// Literal path (e.g., "/login").
    pub path: String,

    /// Page component name (e.g., "LoginPage").
    pub page: String,
}

impl RouteConfig {
    pub fn new(path: impl Into<String>, page: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            page: page.into(),
        }
    }
}

/// The application's built-in route table.
pub fn default_routes() -> Vec<RouteConfig> {
    vec![
        RouteConfig::new("/", "HomePage"),
        RouteConfig::new("/login", "LoginPage"),
        RouteConfig::new("/signup", "SignupPage"),
        RouteConfig::new("/find/password", "FindPasswordPage"),
        RouteConfig::new("/main", "MainPage"),
        RouteConfig::new("/mypage", "MyPage"),
    ]
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RegistryConfig::default();
        assert_eq!(config.routes.len(), 6);
        assert_eq!(config.fallback_page(), Some(PageId::new("NotFoundPage")));
        assert_eq!(config.observability.log_level, "info");
    }

    #[test]
    fn test_default_table_builds() {
        let registry = RegistryConfig::default().build_registry().unwrap();
        assert_eq!(registry.resolve("/find/password").unwrap().as_str(), "FindPasswordPage");
        assert_eq!(registry.resolve("/main").unwrap().as_str(), "MainPage");
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: RegistryConfig = toml::from_str(
            r#"
            [[routes]]
            path = "/"
            page = "HelloWorld"

            [[routes]]
            path = "/login"
            page = "Login"
            "#,
        )
        .unwrap();

        assert_eq!(config.routes, vec![
            RouteConfig::new("/", "HelloWorld"),
            RouteConfig::new("/login", "Login"),
        ]);
        assert_eq!(config.not_found_page.as_deref(), Some("NotFoundPage"));
        assert_eq!(config.observability.log_level, "info");
    }
}
