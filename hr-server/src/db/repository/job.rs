//! Job Listing Repository

use chrono::Utc;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{JobCreate, JobListing, JobUpdate};

/// Candidate audience filter for listing queries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Audience {
    Internal,
    External,
}

impl Audience {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "internal" => Some(Audience::Internal),
            "external" => Some(Audience::External),
            _ => None,
        }
    }
}

#[derive(Clone)]
pub struct JobRepository {
    base: BaseRepository,
}

impl JobRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find all job listings, newest first
    pub async fn find_all(&self) -> RepoResult<Vec<JobListing>> {
        let jobs: Vec<JobListing> = self
            .base
            .db()
            .query("SELECT * FROM job ORDER BY created_at DESC")
            .await?
            .take(0)?;
        Ok(jobs)
    }

    /// Find open listings visible to the given audience
    ///
    /// JobType controls visibility: `both` shows up for either audience.
    pub async fn find_open_for(&self, audience: Audience) -> RepoResult<Vec<JobListing>> {
        let wanted = match audience {
            Audience::Internal => "internal",
            Audience::External => "external",
        };
        let jobs: Vec<JobListing> = self
            .base
            .db()
            .query(
                r#"SELECT * FROM job
                WHERE is_open = true AND (job_type = $wanted OR job_type = 'both')
                ORDER BY created_at DESC"#,
            )
            .bind(("wanted", wanted))
            .await?
            .take(0)?;
        Ok(jobs)
    }

    /// Find job listing by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<JobListing>> {
        let thing = self.base.parse_id(id, "job")?;
        let job: Option<JobListing> = self.base.db().select(thing).await?;
        Ok(job)
    }

    /// Create a new job listing
    pub async fn create(&self, data: JobCreate) -> RepoResult<JobListing> {
        // Department must exist
        let dept: Option<serde_json::Value> = self.base.db().select(data.department.clone()).await?;
        if dept.is_none() {
            return Err(RepoError::Validation(format!(
                "Department {} not found",
                data.department
            )));
        }

        let mut result = self
            .base
            .db()
            .query(
                r#"CREATE job SET
                    title = $title,
                    description = $description,
                    department = $department,
                    employment_type = $employment_type,
                    job_type = $job_type,
                    is_open = true,
                    created_at = $created_at
                RETURN AFTER"#,
            )
            .bind(("title", data.title))
            .bind(("description", data.description))
            .bind(("department", data.department))
            .bind(("employment_type", data.employment_type))
            .bind(("job_type", data.job_type))
            .bind(("created_at", Utc::now().timestamp_millis()))
            .await?;

        let created: Option<JobListing> = result.take(0)?;
        created.ok_or_else(|| RepoError::Database("Failed to create job listing".to_string()))
    }

    /// Update a job listing
    pub async fn update(&self, id: &str, data: JobUpdate) -> RepoResult<JobListing> {
        let thing = self.base.parse_id(id, "job")?;
        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Job {} not found", id)))?;

        if let Some(ref department) = data.department {
            let dept: Option<serde_json::Value> = self.base.db().select(department.clone()).await?;
            if dept.is_none() {
                return Err(RepoError::Validation(format!(
                    "Department {} not found",
                    department
                )));
            }
        }

        let mut result = self
            .base
            .db()
            .query(
                r#"UPDATE $thing SET
                    title = $title OR title,
                    description = $description OR description,
                    department = IF $has_department THEN $department ELSE department END,
                    employment_type = $employment_type OR employment_type,
                    job_type = $job_type OR job_type,
                    is_open = IF $has_is_open THEN $is_open ELSE is_open END
                RETURN AFTER"#,
            )
            .bind(("thing", thing))
            .bind(("title", data.title))
            .bind(("description", data.description))
            .bind(("has_department", data.department.is_some()))
            .bind(("department", data.department))
            .bind(("employment_type", data.employment_type))
            .bind(("job_type", data.job_type))
            .bind(("has_is_open", data.is_open.is_some()))
            .bind(("is_open", data.is_open))
            .await?;

        result
            .take::<Option<JobListing>>(0)?
            .ok_or_else(|| RepoError::NotFound(format!("Job {} not found", id)))
    }

    /// Hard delete a job listing and its applications
    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        let thing = self.base.parse_id(id, "job")?;
        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Job {} not found", id)))?;

        self.base
            .db()
            .query(
                r#"BEGIN TRANSACTION;
                DELETE application WHERE job = $thing;
                DELETE $thing;
                COMMIT TRANSACTION;"#,
            )
            .bind(("thing", thing))
            .await?
            .check()?;
        Ok(true)
    }
}
