//! Job Application Repository

use chrono::Utc;
use shared::ApplicationStatus;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{ApplicationCreate, ApplicationUpdate, JobApplication};

#[derive(Clone)]
pub struct ApplicationRepository {
    base: BaseRepository,
}

impl ApplicationRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find all applications, newest first
    pub async fn find_all(&self) -> RepoResult<Vec<JobApplication>> {
        let applications: Vec<JobApplication> = self
            .base
            .db()
            .query("SELECT * FROM application ORDER BY submitted_at DESC")
            .await?
            .take(0)?;
        Ok(applications)
    }

    /// Find all applications for one job listing
    pub async fn find_by_job(&self, job_id: &str) -> RepoResult<Vec<JobApplication>> {
        let thing = self.base.parse_id(job_id, "job")?;
        let applications: Vec<JobApplication> = self
            .base
            .db()
            .query("SELECT * FROM application WHERE job = $job ORDER BY submitted_at DESC")
            .bind(("job", thing))
            .await?
            .take(0)?;
        Ok(applications)
    }

    /// Find application by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<JobApplication>> {
        let thing = self.base.parse_id(id, "application")?;
        let application: Option<JobApplication> = self.base.db().select(thing).await?;
        Ok(application)
    }

    /// Create a new application (status starts at `pending`)
    pub async fn create(&self, data: ApplicationCreate) -> RepoResult<JobApplication> {
        // Job must exist
        let job: Option<serde_json::Value> = self.base.db().select(data.job.clone()).await?;
        if job.is_none() {
            return Err(RepoError::Validation(format!("Job {} not found", data.job)));
        }

        let now = Utc::now().timestamp_millis();
        let mut result = self
            .base
            .db()
            .query(
                r#"CREATE application SET
                    job = $job,
                    candidate_name = $candidate_name,
                    candidate_email = $candidate_email,
                    status = 'pending',
                    submitted_at = $now,
                    updated_at = $now
                RETURN AFTER"#,
            )
            .bind(("job", data.job))
            .bind(("candidate_name", data.candidate_name))
            .bind(("candidate_email", data.candidate_email))
            .bind(("now", now))
            .await?;

        let created: Option<JobApplication> = result.take(0)?;
        created.ok_or_else(|| RepoError::Database("Failed to create application".to_string()))
    }

    /// Update candidate details
    pub async fn update(&self, id: &str, data: ApplicationUpdate) -> RepoResult<JobApplication> {
        let thing = self.base.parse_id(id, "application")?;
        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Application {} not found", id)))?;

        let mut result = self
            .base
            .db()
            .query(
                r#"UPDATE $thing SET
                    candidate_name = $candidate_name OR candidate_name,
                    candidate_email = $candidate_email OR candidate_email,
                    updated_at = $now
                RETURN AFTER"#,
            )
            .bind(("thing", thing))
            .bind(("candidate_name", data.candidate_name))
            .bind(("candidate_email", data.candidate_email))
            .bind(("now", Utc::now().timestamp_millis()))
            .await?;

        result
            .take::<Option<JobApplication>>(0)?
            .ok_or_else(|| RepoError::NotFound(format!("Application {} not found", id)))
    }

    /// Set the status label
    ///
    /// No transition guard: any status may replace any other.
    pub async fn set_status(
        &self,
        id: &str,
        status: ApplicationStatus,
    ) -> RepoResult<JobApplication> {
        let thing = self.base.parse_id(id, "application")?;
        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Application {} not found", id)))?;

        let mut result = self
            .base
            .db()
            .query(
                r#"UPDATE $thing SET
                    status = $status,
                    updated_at = $now
                RETURN AFTER"#,
            )
            .bind(("thing", thing))
            .bind(("status", status))
            .bind(("now", Utc::now().timestamp_millis()))
            .await?;

        result
            .take::<Option<JobApplication>>(0)?
            .ok_or_else(|| RepoError::NotFound(format!("Application {} not found", id)))
    }

    /// Hard delete an application
    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        let thing = self.base.parse_id(id, "application")?;
        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Application {} not found", id)))?;

        self.base
            .db()
            .query("DELETE $thing")
            .bind(("thing", thing))
            .await?;
        Ok(true)
    }
}
