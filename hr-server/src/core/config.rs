//! Server configuration
//!
//! All settings can be overridden through environment variables:
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | WORK_DIR | /var/lib/hr/server | Work directory (database, documents, logs) |
//! | HTTP_PORT | 3000 | HTTP API port |
//! | ENVIRONMENT | development | development / staging / production |
//! | MAX_DOCUMENT_SIZE | 10485760 | Document upload limit (bytes) |
//! | JWT_SECRET, JWT_EXPIRATION_MINUTES, JWT_ISSUER, JWT_AUDIENCE | - | Session tokens |
//! | IDP_SECRET, IDP_ISSUER, IDP_AUDIENCE | - | Identity provider tokens |

use std::path::PathBuf;

use crate::auth::{IdpConfig, JwtConfig};

#[derive(Debug, Clone)]
pub struct Config {
    /// Work directory holding the database, documents and logs
    pub work_dir: String,
    /// HTTP API port
    pub http_port: u16,
    /// JWT session token configuration
    pub jwt: JwtConfig,
    /// Identity provider verification configuration
    pub idp: IdpConfig,
    /// Runtime environment: development | staging | production
    pub environment: String,
    /// Document upload limit (bytes)
    pub max_document_size: usize,
}

impl Config {
    /// Load configuration from environment variables, with defaults
    pub fn from_env() -> Self {
        Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| "/var/lib/hr/server".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            jwt: JwtConfig::default(),
            idp: IdpConfig::default(),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            max_document_size: std::env::var("MAX_DOCUMENT_SIZE")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(10 * 1024 * 1024),
        }
    }

    /// Override selected values (used by tests)
    pub fn with_overrides(work_dir: impl Into<String>, http_port: u16) -> Self {
        let mut config = Self::from_env();
        config.work_dir = work_dir.into();
        config.http_port = http_port;
        config
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Directory holding the embedded database
    pub fn database_dir(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("database")
    }

    /// Directory holding uploaded documents
    pub fn documents_dir(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("documents")
    }

    /// Directory holding log files
    pub fn logs_dir(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("logs")
    }

    /// Ensure the work directory structure exists
    pub fn ensure_work_dir_structure(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(self.database_dir())?;
        std::fs::create_dir_all(self.documents_dir())?;
        std::fs::create_dir_all(self.logs_dir())?;
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
