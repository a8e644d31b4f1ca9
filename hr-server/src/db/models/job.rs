//! Job Listing Model

use serde::{Deserialize, Serialize};
use shared::{EmploymentType, JobType, Timestamp};
use surrealdb::RecordId;

use super::serde_helpers;

/// Job listing ID type
pub type JobId = RecordId;

/// Job listing matching the `job` table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobListing {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<JobId>,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(with = "serde_helpers::record_id")]
    pub department: RecordId,
    pub employment_type: EmploymentType,
    /// Controls listing visibility to internal vs external candidates
    pub job_type: JobType,
    #[serde(
        default = "default_true",
        deserialize_with = "serde_helpers::bool_true"
    )]
    pub is_open: bool,
    pub created_at: Timestamp,
}

fn default_true() -> bool {
    true
}

/// Create job listing payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobCreate {
    pub title: String,
    pub description: Option<String>,
    #[serde(with = "serde_helpers::record_id")]
    pub department: RecordId,
    pub employment_type: EmploymentType,
    pub job_type: JobType,
}

/// Update job listing payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_helpers::option_record_id"
    )]
    pub department: Option<RecordId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employment_type: Option<EmploymentType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_type: Option<JobType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_open: Option<bool>,
}
