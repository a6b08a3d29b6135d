//! Page route registry (v1)
//!
//! Composition root: loads the route table, builds the registry once and
//! injects it into a navigator.
//!
//! ```text
//!   routes.toml / built-in table
//!           │
//!           ▼
//!   ┌───────────────┐    ┌──────────────┐    ┌──────────────┐
//!   │    config     │───▶│   routing    │───▶│  navigation  │───▶ page
//!   │ load+validate │    │   Registry   │    │  Navigator   │
//!   └───────────────┘    └──────────────┘    └──────────────┘
//! ```

use std::fmt;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use serde::Serialize;

use page_routes::config::{
    load_config, validate_config, ConfigError, ObservabilityConfig, RegistryConfig,
};
use page_routes::navigation::{normalize_location, Navigator};
use page_routes::observability::logging::init_logging;

#[derive(Parser)]
#[command(name = "page-routes")]
#[command(about = "Resolve locations against the application's page route table", long_about = None)]
struct Cli {
    /// Route table file (TOML). Uses the built-in table when omitted.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Report unmatched locations instead of showing the not-found page
    #[arg(long, global = true)]
    no_fallback: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve one or more locations to pages
    Resolve {
        #[arg(required = true)]
        locations: Vec<String>,
    },
    /// List registered routes in order
    List,
    /// Validate the route table
    Check,
}

/// Outcome of resolving one location.
#[derive(Serialize)]
struct Resolution<'a> {
    location: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    page: Option<String>,
    fallback: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl fmt::Display for Resolution<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.page, &self.error) {
            (Some(page), _) if self.fallback => write!(f, "{} -> {} (fallback)", self.location, page),
            (Some(page), _) => write!(f, "{} -> {}", self.location, page),
            (None, Some(error)) => write!(f, "{} -> error: {}", self.location, error),
            (None, None) => write!(f, "{} -> error: unresolved", self.location),
        }
    }
}

#[derive(Serialize)]
struct RouteEntry<'a> {
    path: &'a str,
    page: &'a str,
}

fn load(cli: &Cli) -> Result<RegistryConfig, ConfigError> {
    match &cli.config {
        Some(path) => load_config(path),
        None => {
            let config = RegistryConfig::default();
            validate_config(&config).map_err(ConfigError::Validation)?;
            Ok(config)
        }
    }
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Logging comes up before anything is reported; the configured level
    // applies when the file loaded, the default level otherwise.
    let loaded = load(&cli);
    let observability = loaded
        .as_ref()
        .map(|config| config.observability.clone())
        .unwrap_or_else(|_| ObservabilityConfig::default());
    init_logging(&observability);

    let source = cli
        .config
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "built-in".to_string());

    let config = match loaded {
        Ok(config) => config,
        Err(ConfigError::Validation(errors)) => {
            tracing::error!(source = %source, error_count = errors.len(), "Route table failed validation");
            for error in &errors {
                eprintln!("error: {}", error);
            }
            return Ok(ExitCode::FAILURE);
        }
        Err(e) => {
            tracing::error!(source = %source, error = %e, "Failed to load route table");
            return Err(e.into());
        }
    };

    tracing::info!(
        source = %source,
        route_count = config.routes.len(),
        not_found_page = ?config.not_found_page,
        "Configuration loaded"
    );

    // Any construction error is fatal: never run with an invalid registry.
    let registry = Arc::new(config.build_registry()?);

    let mut navigator = Navigator::new(registry);
    if !cli.no_fallback {
        if let Some(page) = config.fallback_page() {
            navigator = navigator.with_fallback(page);
        }
    }

    match &cli.command {
        Commands::Resolve { locations } => {
            let results: Vec<Resolution<'_>> = locations
                .iter()
                .map(|location| {
                    let outcome = normalize_location(location).and_then(|path| {
                        let nav = navigator.navigate(&path)?;
                        Ok((path, nav))
                    });
                    match outcome {
                        Ok((path, nav)) => Resolution {
                            location: location.as_str(),
                            path: Some(path),
                            page: Some(nav.page().to_string()),
                            fallback: nav.is_fallback(),
                            error: None,
                        },
                        Err(e) => Resolution {
                            location: location.as_str(),
                            path: None,
                            page: None,
                            fallback: false,
                            error: Some(e.to_string()),
                        },
                    }
                })
                .collect();

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&results)?);
            } else {
                for result in &results {
                    println!("{}", result);
                }
            }

            let failed = results.iter().any(|r| r.error.is_some());
            Ok(if failed { ExitCode::FAILURE } else { ExitCode::SUCCESS })
        }
        Commands::List => {
            let registry = navigator.registry();
            if cli.json {
                let routes: Vec<RouteEntry<'_>> = registry
                    .iter()
                    .map(|r| RouteEntry {
                        path: r.path(),
                        page: r.page().as_str(),
                    })
                    .collect();
                println!("{}", serde_json::to_string_pretty(&routes)?);
            } else {
                let width = registry.iter().map(|r| r.path().len()).max().unwrap_or(0);
                for route in registry.iter() {
                    println!("{:<width$}  {}", route.path(), route.page(), width = width);
                }
            }
            Ok(ExitCode::SUCCESS)
        }
        Commands::Check => {
            println!("ok: {} routes", navigator.registry().len());
            Ok(ExitCode::SUCCESS)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolution(page: Option<&str>, fallback: bool, error: Option<&str>) -> Resolution<'static> {
        Resolution {
            location: "/x",
            path: page.map(|_| "/x".to_string()),
            page: page.map(str::to_string),
            fallback,
            error: error.map(str::to_string),
        }
    }

    #[test]
    fn test_resolution_text() {
        assert_eq!(resolution(Some("LoginPage"), false, None).to_string(), "/x -> LoginPage");
        assert_eq!(
            resolution(Some("NotFoundPage"), true, None).to_string(),
            "/x -> NotFoundPage (fallback)"
        );
        assert_eq!(
            resolution(None, false, Some("No route matches path: /x")).to_string(),
            "/x -> error: No route matches path: /x"
        );
    }

    #[test]
    fn test_resolution_json_skips_empty_fields() {
        let json = serde_json::to_value(resolution(None, false, Some("boom"))).unwrap();
        assert_eq!(json, serde_json::json!({ "location": "/x", "fallback": false, "error": "boom" }));
    }

    #[test]
    fn test_flags_are_global() {
        let cli = Cli::try_parse_from(["page-routes", "resolve", "--json", "--no-fallback", "/login"]).unwrap();
        assert!(cli.json);
        assert!(cli.no_fallback);
        assert!(matches!(cli.command, Commands::Resolve { ref locations } if locations == &["/login"]));
    }
}
