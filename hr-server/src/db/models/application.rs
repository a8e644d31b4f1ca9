//! Job Application Model

use serde::{Deserialize, Serialize};
use shared::{ApplicationStatus, Timestamp};
use surrealdb::RecordId;

use super::serde_helpers;

/// Application ID type
pub type ApplicationId = RecordId;

/// Job application matching the `application` table
///
/// `status` is a plain label; transitions are not mechanically enforced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobApplication {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<ApplicationId>,
    #[serde(with = "serde_helpers::record_id")]
    pub job: RecordId,
    pub candidate_name: String,
    pub candidate_email: String,
    #[serde(default)]
    pub status: ApplicationStatus,
    pub submitted_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Create application payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationCreate {
    #[serde(with = "serde_helpers::record_id")]
    pub job: RecordId,
    pub candidate_name: String,
    pub candidate_email: String,
}

/// Update application payload (candidate details only; status has its own endpoint)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub candidate_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub candidate_email: Option<String>,
}

/// Status change payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationStatusUpdate {
    pub status: ApplicationStatus,
}
