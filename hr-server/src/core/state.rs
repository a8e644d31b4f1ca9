//! Shared server state
//!
//! One [`ServerState`] is built at startup and cloned into every handler.
//! All fields are cheap to clone (`Arc` or connection handles).

use std::sync::Arc;

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::auth::{IdentityVerifier, JwtService};
use crate::core::Config;
use crate::db::DbService;
use crate::services::ProvisioningService;
use crate::utils::{AppError, AppResult};

#[derive(Clone)]
pub struct ServerState {
    pub config: Arc<Config>,
    db: Surreal<Db>,
    jwt_service: Arc<JwtService>,
    identity_verifier: Arc<IdentityVerifier>,
    provisioning: ProvisioningService,
}

impl ServerState {
    /// Open the database and wire up all services
    pub async fn initialize(config: &Config) -> AppResult<Self> {
        config
            .ensure_work_dir_structure()
            .map_err(|e| AppError::internal(format!("Failed to create work directory: {}", e)))?;

        let db = DbService::new(&config.database_dir()).await?.db;
        let jwt_service = Arc::new(JwtService::with_config(config.jwt.clone()));
        let identity_verifier = Arc::new(IdentityVerifier::with_config(config.idp.clone()));
        let provisioning = ProvisioningService::new(db.clone());

        tracing::info!(
            work_dir = %config.work_dir,
            environment = %config.environment,
            "Server state initialized"
        );

        Ok(Self {
            config: Arc::new(config.clone()),
            db,
            jwt_service,
            identity_verifier,
            provisioning,
        })
    }

    pub fn get_db(&self) -> Surreal<Db> {
        self.db.clone()
    }

    pub fn get_jwt_service(&self) -> Arc<JwtService> {
        self.jwt_service.clone()
    }

    pub fn identity_verifier(&self) -> Arc<IdentityVerifier> {
        self.identity_verifier.clone()
    }

    pub fn provisioning(&self) -> &ProvisioningService {
        &self.provisioning
    }
}
