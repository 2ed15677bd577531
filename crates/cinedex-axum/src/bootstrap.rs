//! Axum server bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the web adapter. The store handle is opened here at startup and
//! closed here after shutdown.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use cinedex_core::MovieCatalogService;
use cinedex_db::{CoreFactory, SqlitePool, setup_database};

/// Port used when none is configured.
pub const DEFAULT_PORT: u16 = 3000;

/// Database file used when none is configured.
pub const DEFAULT_DATABASE_PATH: &str = "cinedex.db";

/// CORS configuration for the web server.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CorsConfig {
    /// Allow all origins.
    #[default]
    AllowAll,
    /// Allow specific origins.
    AllowOrigins(Vec<String>),
}

/// Server configuration for the Axum adapter.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port for the HTTP server.
    pub port: u16,
    /// Path to the `SQLite` database file.
    pub database_path: PathBuf,
    /// Optional path to the front end's static assets.
    pub static_dir: Option<PathBuf>,
    /// CORS configuration.
    pub cors: CorsConfig,
}

impl ServerConfig {
    /// Create config with default values.
    pub fn with_defaults() -> Self {
        Self {
            port: DEFAULT_PORT,
            database_path: PathBuf::from(DEFAULT_DATABASE_PATH),
            static_dir: None,
            cors: CorsConfig::default(),
        }
    }

    /// Set the listen port.
    #[must_use]
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Set the database file.
    #[must_use]
    pub fn with_database_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.database_path = path.into();
        self
    }

    /// Set the static directory for front-end serving.
    #[must_use]
    pub fn with_static_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.static_dir = Some(path.into());
        self
    }

    /// Set CORS to allow specific origins.
    #[must_use]
    pub fn with_allowed_origins(mut self, origins: Vec<String>) -> Self {
        self.cors = CorsConfig::AllowOrigins(origins);
        self
    }
}

/// Application context for the Axum adapter.
///
/// Owns the catalog service and the store handle behind it.
pub struct AxumContext {
    /// The movie catalog.
    pub catalog: Arc<MovieCatalogService>,
    pool: SqlitePool,
}

impl AxumContext {
    /// Build a context over an already opened store.
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            catalog: Arc::new(CoreFactory::build_catalog(pool.clone())),
            pool,
        }
    }

    /// The store handle, for closing it at shutdown.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

/// Open the store and assemble the context.
pub async fn bootstrap(config: &ServerConfig) -> Result<AxumContext> {
    tracing::info!(
        target: "cinedex.paths",
        database_path = %config.database_path.display(),
        static_dir = ?config.static_dir,
        "Axum bootstrap resolved paths"
    );

    let pool = setup_database(&config.database_path).await?;
    Ok(AxumContext::new(pool))
}

/// Resolves when the process is asked to stop.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to install Ctrl+C handler: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}

/// Start the web server on the configured port.
///
/// If `config.static_dir` is set, serves static assets for non-API paths.
/// Runs until Ctrl+C, then closes the store.
pub async fn start_server(config: ServerConfig) -> Result<()> {
    use tokio::net::TcpListener;
    use tracing::info;

    let ctx = bootstrap(&config).await?;
    let pool = ctx.pool().clone();

    let app = if let Some(ref static_dir) = config.static_dir {
        info!("Serving static assets from: {}", static_dir.display());
        crate::routes::create_static_router(ctx, static_dir, &config.cors)
    } else {
        crate::routes::create_router(ctx, &config.cors)
    };

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("cinedex server running on http://localhost:{}", config.port);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    info!("Movie store closed");
    Ok(())
}
