//! HR Server - employee and recruitment management backend
//!
//! # Architecture
//!
//! - **Provisioning** (`services`): identity-provider logins create or
//!   refresh the account/employee pair in one transaction
//! - **Database** (`db`): embedded SurrealDB storage
//! - **Authentication** (`auth`): provider token verification, session JWTs
//! - **HTTP API** (`api`): RESTful API surface
//!
//! # Module structure
//!
//! ```text
//! hr-server/src/
//! ├── core/          # Configuration, state, server lifecycle
//! ├── auth/          # JWT sessions, identity verification, permissions
//! ├── services/      # Account provisioning
//! ├── api/           # HTTP routes and handlers
//! ├── db/            # Models and repositories
//! └── utils/         # Errors, logging, validation
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod db;
pub mod services;
pub mod utils;

// Re-export public types
pub use auth::{CurrentUser, IdentityVerifier, JwtService};
pub use core::{Config, Server, ServerState};
pub use services::ProvisioningService;
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

// Security logging macro - supports tracing format specifiers
#[macro_export]
macro_rules! security_log {
    ($level:expr, $event:expr, $($key:ident = $value:expr),*) => {
        tracing::info!(
            target: "security",
            level = $level,
            event = $event,
            $($key = $value),*
        );
    };
}

/// Set up process environment: dotenv, logging, work directory
pub fn setup_environment() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let config = Config::from_env();
    config.ensure_work_dir_structure()?;

    let log_dir = config.logs_dir();
    init_logger_with_file(
        std::env::var("LOG_LEVEL").ok().as_deref(),
        log_dir.to_str(),
    );

    Ok(())
}

pub fn print_banner() {
    println!(
        r#"
    __  ______
   / / / / __ \
  / /_/ / /_/ /
 / __  / _, _/
/_/ /_/_/ |_|  server
    "#
    );
}
