//! Document Repository
//!
//! Metadata rows only; file bytes live on disk under `work_dir/documents/`.

use chrono::Utc;
use surrealdb::{RecordId, Surreal};
use surrealdb::engine::local::Db;

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::DocumentRecord;

/// Fields persisted for a newly stored file
#[derive(Debug, Clone)]
pub struct DocumentMeta {
    pub employee: RecordId,
    pub file_name: String,
    pub original_name: String,
    pub content_type: String,
    pub size: u64,
    pub sha256: String,
}

#[derive(Clone)]
pub struct DocumentRepository {
    base: BaseRepository,
}

impl DocumentRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Parse an employee id for attaching documents
    pub fn parse_employee_id(&self, id: &str) -> RepoResult<RecordId> {
        self.base.parse_id(id, "employee")
    }

    /// Find all documents attached to one employee
    pub async fn find_by_employee(&self, employee_id: &str) -> RepoResult<Vec<DocumentRecord>> {
        let thing = self.base.parse_id(employee_id, "employee")?;
        let documents: Vec<DocumentRecord> = self
            .base
            .db()
            .query("SELECT * FROM document WHERE employee = $employee ORDER BY uploaded_at DESC")
            .bind(("employee", thing))
            .await?
            .take(0)?;
        Ok(documents)
    }

    /// Find document by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<DocumentRecord>> {
        let thing = self.base.parse_id(id, "document")?;
        let document: Option<DocumentRecord> = self.base.db().select(thing).await?;
        Ok(document)
    }

    /// Record a stored file
    pub async fn create(&self, meta: DocumentMeta) -> RepoResult<DocumentRecord> {
        // Employee must exist
        let employee: Option<serde_json::Value> =
            self.base.db().select(meta.employee.clone()).await?;
        if employee.is_none() {
            return Err(RepoError::Validation(format!(
                "Employee {} not found",
                meta.employee
            )));
        }

        let mut result = self
            .base
            .db()
            .query(
                r#"CREATE document SET
                    employee = $employee,
                    file_name = $file_name,
                    original_name = $original_name,
                    content_type = $content_type,
                    size = $size,
                    sha256 = $sha256,
                    uploaded_at = $uploaded_at
                RETURN AFTER"#,
            )
            .bind(("employee", meta.employee))
            .bind(("file_name", meta.file_name))
            .bind(("original_name", meta.original_name))
            .bind(("content_type", meta.content_type))
            .bind(("size", meta.size))
            .bind(("sha256", meta.sha256))
            .bind(("uploaded_at", Utc::now().timestamp_millis()))
            .await?;

        let created: Option<DocumentRecord> = result.take(0)?;
        created.ok_or_else(|| RepoError::Database("Failed to create document record".to_string()))
    }

    /// Hard delete a document row (caller removes the file)
    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        let thing = self.base.parse_id(id, "document")?;
        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Document {} not found", id)))?;

        self.base
            .db()
            .query("DELETE $thing")
            .bind(("thing", thing))
            .await?;
        Ok(true)
    }
}
