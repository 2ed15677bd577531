//! Command-line and environment configuration for the `cinedex` binary.

use std::path::PathBuf;

use clap::Parser;

use crate::bootstrap::{DEFAULT_DATABASE_PATH, DEFAULT_PORT, ServerConfig};

/// Serve the movie catalog API and front end.
///
/// Every flag can also be set through the environment (or a `.env` file).
#[derive(Debug, Parser)]
#[command(name = "cinedex")]
#[command(about = "Serve the movie catalog API")]
pub struct Cli {
    /// Port to listen on
    #[arg(short, long, env = "SERVER_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// SQLite database file (a `sqlite:` prefix is accepted)
    #[arg(long = "database", env = "DATABASE_URL", default_value = DEFAULT_DATABASE_PATH)]
    pub database: String,

    /// Directory with the front end's static files
    #[arg(long = "static-dir", env = "STATIC_DIR")]
    pub static_dir: Option<PathBuf>,

    /// Allowed CORS origins; all origins are allowed when empty
    #[arg(long = "cors-origin", env = "CORS_ORIGINS", value_delimiter = ',')]
    pub cors_origins: Vec<String>,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

impl Cli {
    /// Default `tracing` filter when `RUST_LOG` is not set.
    pub fn default_log_filter(&self) -> &'static str {
        if self.verbose {
            "cinedex=debug,cinedex_axum=debug,cinedex_core=debug,cinedex_db=debug,tower_http=debug"
        } else {
            "cinedex=info,cinedex_axum=info,cinedex_db=info,tower_http=info"
        }
    }

    /// Turn parsed arguments into a server configuration.
    pub fn into_config(self) -> ServerConfig {
        let database = self
            .database
            .strip_prefix("sqlite://")
            .or_else(|| self.database.strip_prefix("sqlite:"))
            .unwrap_or(&self.database)
            .to_string();

        let mut config = ServerConfig::with_defaults()
            .with_port(self.port)
            .with_database_path(database);
        if let Some(dir) = self.static_dir {
            config = config.with_static_dir(dir);
        }
        if !self.cors_origins.is_empty() {
            config = config.with_allowed_origins(self.cors_origins);
        }
        config
    }
}
