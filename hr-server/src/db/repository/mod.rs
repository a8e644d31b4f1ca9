//! Repository Module
//!
//! CRUD operations over the embedded SurrealDB tables.
//!
//! ID convention: the full "table:id" form is used across the stack.
//!   - parse: let id: RecordId = "job:abc".parse()?;
//!   - build: let id = RecordId::from_table_key("job", "abc");
//!   - table: id.table(), bare key: id.key().to_string()

pub mod application;
pub mod certification;
pub mod department;
pub mod document;
pub mod employee;
pub mod job;
pub mod user_account;

// Re-exports
pub use application::ApplicationRepository;
pub use certification::CertificationRepository;
pub use department::DepartmentRepository;
pub use document::{DocumentMeta, DocumentRepository};
pub use employee::EmployeeRepository;
pub use job::{Audience, JobRepository};
pub use user_account::UserAccountRepository;

use surrealdb::Surreal;
use surrealdb::engine::local::Db;
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<surrealdb::Error> for RepoError {
    fn from(err: surrealdb::Error) -> Self {
        let msg = err.to_string();
        // Unique index violations read "Database index `...` already contains ..."
        if msg.contains("already contains") {
            RepoError::Duplicate(msg)
        } else {
            RepoError::Database(msg)
        }
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Base repository with database reference
#[derive(Clone)]
pub struct BaseRepository {
    db: Surreal<Db>,
}

impl BaseRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &Surreal<Db> {
        &self.db
    }

    /// Parse a "table:id" string, rejecting ids from other tables
    pub fn parse_id(&self, id: &str, table: &str) -> RepoResult<surrealdb::RecordId> {
        let thing: surrealdb::RecordId = id
            .parse()
            .map_err(|_| RepoError::Validation(format!("Invalid ID: {}", id)))?;
        if thing.table() != table {
            return Err(RepoError::Validation(format!(
                "Invalid {} ID: {}",
                table, id
            )));
        }
        Ok(thing)
    }
}
