//! Blomso Server
//!
//! Serves the site's one write path (`POST /api/lead`), read-only views of
//! the content catalog for page rendering, the SEO artefacts (sitemap, web
//! manifest, JSON-LD) and redirects to external product links.

#![warn(missing_docs)]

pub mod config;
pub mod handlers;

use blomso_content::{Catalog, CatalogError};
use blomso_leads::InMemoryLeadStore;
use config::ServerConfig;
use handlers::{create_router, AppState};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Server error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Catalog could not be loaded
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Server binding error
    #[error("Failed to bind server: {0}")]
    Bind(#[from] std::io::Error),

    /// Server error
    #[error("Server error: {0}")]
    Server(String),
}

/// Initialize tracing; `RUST_LOG` wins over the configured level
pub fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // A subscriber may already be installed (tests, embedding); keep it.
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Load the catalog named by the configuration, auditing it in strict mode
pub fn load_catalog(config: &ServerConfig) -> Result<Catalog, CatalogError> {
    let catalog = match &config.catalog_path {
        Some(path) => {
            info!("Loading catalog from {}", path.display());
            Catalog::from_file(path)?
        }
        None => {
            info!("Loading embedded catalog");
            Catalog::builtin()?
        }
    };

    if config.strict_catalog {
        catalog.into_checked()
    } else {
        Ok(catalog)
    }
}

/// Build application state from configuration
pub fn build_state(config: &ServerConfig) -> Result<AppState, ServerError> {
    let catalog = load_catalog(config)?;

    Ok(AppState {
        catalog: Arc::new(catalog),
        leads: Arc::new(InMemoryLeadStore::new()),
    })
}

/// Start the HTTP server
///
/// Loads the catalog, creates the lead store, and serves until the
/// process is stopped.
pub async fn start_server(config: ServerConfig) -> Result<(), ServerError> {
    init_tracing(&config.log_level);

    info!("Starting Blomso site service");
    info!("Bind address: {}", config.bind_addr());

    let state = build_state(&config)?;
    let registry = state.catalog.registry();
    info!(
        "Catalog: {} claims ({} verified, {} traction), {} supporters",
        registry.len(),
        registry.verified_claims(None).len(),
        registry.traction_claims(None).len(),
        state.catalog.supporters().len()
    );

    let app = create_router(state);

    let listener = TcpListener::bind(&config.bind_addr()).await?;
    info!("Listening on {}", config.bind_addr());

    axum::serve(listener, app)
        .await
        .map_err(|e| ServerError::Server(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use blomso_domain::LeadStore;

    #[test]
    fn test_build_state_with_embedded_catalog() {
        let state = build_state(&ServerConfig::default()).unwrap();
        assert_eq!(state.catalog.registry().len(), 16);
        assert_eq!(state.leads.count().unwrap(), 0);
    }

    #[test]
    fn test_missing_catalog_file() {
        let config = ServerConfig {
            catalog_path: Some("/nonexistent/catalog.toml".into()),
            ..ServerConfig::default()
        };
        assert!(matches!(
            build_state(&config),
            Err(ServerError::Catalog(CatalogError::FileRead(_)))
        ));
    }
}
