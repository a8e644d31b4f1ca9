//! Certification Repository

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{Certification, CertificationCreate, CertificationUpdate};

#[derive(Clone)]
pub struct CertificationRepository {
    base: BaseRepository,
}

impl CertificationRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find all certifications held by one employee
    pub async fn find_by_employee(&self, employee_id: &str) -> RepoResult<Vec<Certification>> {
        let thing = self.base.parse_id(employee_id, "employee")?;
        let certifications: Vec<Certification> = self
            .base
            .db()
            .query("SELECT * FROM certification WHERE employee = $employee ORDER BY issued_at DESC")
            .bind(("employee", thing))
            .await?
            .take(0)?;
        Ok(certifications)
    }

    /// Find certification by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Certification>> {
        let thing = self.base.parse_id(id, "certification")?;
        let certification: Option<Certification> = self.base.db().select(thing).await?;
        Ok(certification)
    }

    /// Create a new certification
    pub async fn create(&self, data: CertificationCreate) -> RepoResult<Certification> {
        // Employee must exist
        let employee: Option<serde_json::Value> =
            self.base.db().select(data.employee.clone()).await?;
        if employee.is_none() {
            return Err(RepoError::Validation(format!(
                "Employee {} not found",
                data.employee
            )));
        }

        let mut result = self
            .base
            .db()
            .query(
                r#"CREATE certification SET
                    employee = $employee,
                    name = $name,
                    issuer = $issuer,
                    issued_at = $issued_at,
                    expires_at = $expires_at
                RETURN AFTER"#,
            )
            .bind(("employee", data.employee))
            .bind(("name", data.name))
            .bind(("issuer", data.issuer))
            .bind(("issued_at", data.issued_at))
            .bind(("expires_at", data.expires_at))
            .await?;

        let created: Option<Certification> = result.take(0)?;
        created.ok_or_else(|| RepoError::Database("Failed to create certification".to_string()))
    }

    /// Update a certification
    pub async fn update(&self, id: &str, data: CertificationUpdate) -> RepoResult<Certification> {
        let thing = self.base.parse_id(id, "certification")?;
        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Certification {} not found", id)))?;

        let mut result = self
            .base
            .db()
            .query(
                r#"UPDATE $thing SET
                    name = $name OR name,
                    issuer = $issuer OR issuer,
                    issued_at = $issued_at OR issued_at,
                    expires_at = IF $has_expires_at THEN $expires_at ELSE expires_at END
                RETURN AFTER"#,
            )
            .bind(("thing", thing))
            .bind(("name", data.name))
            .bind(("issuer", data.issuer))
            .bind(("issued_at", data.issued_at))
            .bind(("has_expires_at", data.expires_at.is_some()))
            .bind(("expires_at", data.expires_at))
            .await?;

        result
            .take::<Option<Certification>>(0)?
            .ok_or_else(|| RepoError::NotFound(format!("Certification {} not found", id)))
    }

    /// Hard delete a certification
    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        let thing = self.base.parse_id(id, "certification")?;
        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Certification {} not found", id)))?;

        self.base
            .db()
            .query("DELETE $thing")
            .bind(("thing", thing))
            .await?;
        Ok(true)
    }
}
