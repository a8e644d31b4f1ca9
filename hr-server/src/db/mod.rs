//! Database Module
//!
//! Embedded SurrealDB storage and schema definition.

pub mod models;
pub mod repository;

use std::path::Path;

use surrealdb::Surreal;
use surrealdb::engine::local::{Db, RocksDb};

use crate::utils::AppError;

/// Database service - owns the embedded SurrealDB handle
#[derive(Clone)]
pub struct DbService {
    pub db: Surreal<Db>,
}

impl DbService {
    /// Open (or create) the database at the given path and define the schema
    pub async fn new(db_path: &Path) -> Result<Self, AppError> {
        let db: Surreal<Db> = Surreal::new::<RocksDb>(db_path)
            .await
            .map_err(|e| AppError::database(format!("Failed to open database: {e}")))?;

        db.use_ns("hr")
            .use_db("main")
            .await
            .map_err(|e| AppError::database(format!("Failed to select namespace: {e}")))?;

        define_schema(&db).await?;

        tracing::info!(path = %db_path.display(), "Database connection established");

        Ok(Self { db })
    }
}

/// Define tables and indexes (idempotent)
///
/// The unique index on `user_account.email` is the arbiter for concurrent
/// provisioning of the same email: the losing transaction fails with an
/// index violation instead of creating a second account.
async fn define_schema(db: &Surreal<Db>) -> Result<(), AppError> {
    db.query(
        r#"
        DEFINE TABLE IF NOT EXISTS user_account SCHEMALESS;
        DEFINE INDEX IF NOT EXISTS user_account_email ON TABLE user_account COLUMNS email UNIQUE;
        DEFINE TABLE IF NOT EXISTS employee SCHEMALESS;
        DEFINE TABLE IF NOT EXISTS department SCHEMALESS;
        DEFINE INDEX IF NOT EXISTS department_name ON TABLE department COLUMNS name UNIQUE;
        DEFINE TABLE IF NOT EXISTS job SCHEMALESS;
        DEFINE TABLE IF NOT EXISTS application SCHEMALESS;
        DEFINE TABLE IF NOT EXISTS certification SCHEMALESS;
        DEFINE TABLE IF NOT EXISTS document SCHEMALESS;
        "#,
    )
    .await
    .map_err(|e| AppError::database(format!("Failed to define schema: {e}")))?
    .check()
    .map_err(|e| AppError::database(format!("Failed to define schema: {e}")))?;

    Ok(())
}
