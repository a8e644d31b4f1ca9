//! Certification Model

use serde::{Deserialize, Serialize};
use shared::Timestamp;
use surrealdb::RecordId;

use super::serde_helpers;

/// Certification ID type
pub type CertificationId = RecordId;

/// Certification matching the `certification` table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Certification {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<CertificationId>,
    #[serde(with = "serde_helpers::record_id")]
    pub employee: RecordId,
    pub name: String,
    pub issuer: String,
    pub issued_at: Timestamp,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<Timestamp>,
}

/// Create certification payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CertificationCreate {
    #[serde(with = "serde_helpers::record_id")]
    pub employee: RecordId,
    pub name: String,
    pub issuer: String,
    pub issued_at: Timestamp,
    pub expires_at: Option<Timestamp>,
}

/// Update certification payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CertificationUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issuer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issued_at: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<Timestamp>,
}
