//! Route registration and lookup.
//!
//! # Responsibilities
//! - Store registered routes in insertion order
//! - Reject duplicate paths at construction
//! - Resolve a normalized path to its page
//!
//! # Design Decisions
//! - Immutable after construction (shareable across threads without locks)
//! - O(1) exact-match lookup via HashMap index into the route list
//! - Explicit NotFound rather than silent default
//! - Normalization (query, fragment, leading slash) happens before lookup

use std::collections::HashMap;

use crate::routing::types::{PageId, Route, RoutingError, RoutingResult};

/// Immutable table of routes keyed by literal path.
#[derive(Debug, Clone)]
pub struct Registry<P = PageId> {
    routes: Vec<Route<P>>,
    /// Path -> index into `routes`.
    index: HashMap<String, usize>,
}

impl<P> Registry<P> {
    /// Build a registry from an ordered list of routes.
    ///
    /// Fails with [`RoutingError::DuplicatePath`] on the first path seen twice.
    pub fn new(routes: impl IntoIterator<Item = Route<P>>) -> RoutingResult<Self> {
        let routes: Vec<Route<P>> = routes.into_iter().collect();
        let mut index = HashMap::with_capacity(routes.len());

        for (i, route) in routes.iter().enumerate() {
            if index.insert(route.path().to_string(), i).is_some() {
                tracing::error!(path = %route.path(), "Duplicate route path");
                return Err(RoutingError::DuplicatePath {
                    path: route.path().to_string(),
                });
            }
        }

        tracing::debug!(route_count = routes.len(), "Route registry compiled");
        Ok(Self { routes, index })
    }

    /// Start a declarative route list.
    pub fn builder() -> RegistryBuilder<P> {
        RegistryBuilder::new()
    }

    /// Resolve an exact path to its page.
    pub fn resolve(&self, path: &str) -> RoutingResult<&P> {
        self.index
            .get(path)
            .map(|&i| self.routes[i].page())
            .ok_or_else(|| RoutingError::NotFound {
                path: path.to_string(),
            })
    }

    pub fn contains(&self, path: &str) -> bool {
        self.index.contains_key(path)
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Routes in registration order.
    pub fn routes(&self) -> &[Route<P>] {
        &self.routes
    }

    pub fn iter(&self) -> impl Iterator<Item = &Route<P>> {
        self.routes.iter()
    }
}

impl<'a, P> IntoIterator for &'a Registry<P> {
    type Item = &'a Route<P>;
    type IntoIter = std::slice::Iter<'a, Route<P>>;

    fn into_iter(self) -> Self::IntoIter {
        self.routes.iter()
    }
}

/// Collects routes declaratively before freezing them into a [`Registry`].
#[derive(Debug)]
pub struct RegistryBuilder<P = PageId> {
    routes: Vec<Route<P>>,
}

impl<P> RegistryBuilder<P> {
    pub fn new() -> Self {
        Self { routes: Vec::new() }
    }

    /// Register a path. Duplicates are only detected by [`build`](Self::build).
    pub fn route(mut self, path: impl Into<String>, page: impl Into<P>) -> Self {
        self.routes.push(Route::new(path, page));
        self
    }

    pub fn build(self) -> RoutingResult<Registry<P>> {
        Registry::new(self.routes)
    }
}

impl<P> Default for RegistryBuilder<P> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_routes() -> Vec<Route> {
        vec![
            Route::new("/", "HomePage"),
            Route::new("/login", "LoginPage"),
            Route::new("/signup", "SignupPage"),
            Route::new("/find/password", "FindPasswordPage"),
            Route::new("/mypage", "MyPage"),
        ]
    }

    #[test]
    fn test_resolve_registered_paths() {
        let registry = Registry::new(sample_routes()).unwrap();

        assert_eq!(registry.resolve("/").unwrap().as_str(), "HomePage");
        assert_eq!(registry.resolve("/login").unwrap().as_str(), "LoginPage");
        assert_eq!(registry.resolve("/signup").unwrap().as_str(), "SignupPage");
        assert_eq!(registry.resolve("/find/password").unwrap().as_str(), "FindPasswordPage");
        assert_eq!(registry.resolve("/mypage").unwrap().as_str(), "MyPage");
        assert_eq!(registry.len(), 5);
    }

    #[test]
    fn test_resolve_unknown_path() {
        let registry = Registry::new(sample_routes()).unwrap();

        let err = registry.resolve("/unknown").unwrap_err();
        assert_eq!(err, RoutingError::NotFound { path: "/unknown".to_string() });

        // Exact match only: no prefix, no trailing slash, case-sensitive.
        assert!(registry.resolve("/find").is_err());
        assert!(registry.resolve("/login/").is_err());
        assert!(registry.resolve("/LOGIN").is_err());
        assert!(registry.resolve("").is_err());
    }

    #[test]
    fn test_resolve_is_idempotent() {
        let registry = Registry::new(sample_routes()).unwrap();

        let first = registry.resolve("/signup").cloned();
        for _ in 0..10 {
            assert_eq!(registry.resolve("/signup").cloned(), first);
        }
        let miss = registry.resolve("/nope").unwrap_err();
        assert_eq!(registry.resolve("/nope").unwrap_err(), miss);
    }

    #[test]
    fn test_duplicate_path_rejected() {
        let routes: Vec<Route> = vec![
            Route::new("/", "HomePage"),
            Route::new("/login", "LoginPage"),
            Route::new("/login", "OtherLoginPage"),
        ];

        let err = Registry::new(routes).unwrap_err();
        assert_eq!(err, RoutingError::DuplicatePath { path: "/login".to_string() });
        assert!(err.is_configuration());
    }

    #[test]
    fn test_order_independence() {
        let forward = Registry::new(sample_routes()).unwrap();
        let mut reversed_routes = sample_routes();
        reversed_routes.reverse();
        let reversed = Registry::new(reversed_routes).unwrap();

        for path in ["/", "/login", "/signup", "/find/password", "/mypage", "/unknown"] {
            assert_eq!(forward.resolve(path), reversed.resolve(path));
        }
    }

    #[test]
    fn test_iteration_preserves_insertion_order() {
        let registry = Registry::new(sample_routes()).unwrap();
        let paths: Vec<&str> = registry.iter().map(|r| r.path()).collect();
        assert_eq!(paths, vec!["/", "/login", "/signup", "/find/password", "/mypage"]);
        assert_eq!(registry.routes().len(), (&registry).into_iter().count());
    }

    #[test]
    fn test_builder() {
        let registry: Registry<&'static str> = Registry::builder()
            .route("/", "home")
            .route("/login", "login")
            .build()
            .unwrap();

        assert_eq!(registry.resolve("/login"), Ok(&"login"));
        assert!(registry.contains("/"));
        assert!(!registry.contains("/signup"));

        let dup = RegistryBuilder::<&'static str>::new()
            .route("/login", "a")
            .route("/login", "b")
            .build();
        assert!(matches!(dup, Err(RoutingError::DuplicatePath { .. })));
    }

    #[test]
    fn test_empty_registry() {
        let registry: Registry = Registry::new(Vec::new()).unwrap();
        assert!(registry.is_empty());
        assert!(registry.resolve("/").is_err());
    }

    #[test]
    fn test_registry_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Registry>();
    }
}
