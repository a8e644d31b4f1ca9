//! Document Record Model
//!
//! Metadata row for a file stored under `work_dir/documents/`.

use serde::{Deserialize, Serialize};
use shared::Timestamp;
use surrealdb::RecordId;

use super::serde_helpers;

/// Document ID type
pub type DocumentId = RecordId;

/// Document record matching the `document` table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentRecord {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<DocumentId>,
    #[serde(with = "serde_helpers::record_id")]
    pub employee: RecordId,
    /// Stored file name (uuid + original extension)
    pub file_name: String,
    pub original_name: String,
    pub content_type: String,
    pub size: u64,
    /// SHA-256 of the file content
    pub sha256: String,
    pub uploaded_at: Timestamp,
}
