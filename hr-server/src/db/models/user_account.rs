//! User Account Model

use serde::{Deserialize, Serialize};
use shared::Timestamp;
use surrealdb::RecordId;

use super::serde_helpers;

/// User account ID type
pub type UserAccountId = RecordId;

/// User account matching the `user_account` table
///
/// One record per authenticated identity, keyed by email. The employee
/// profile shares the account's record key (`employee:<key>`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserAccount {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<UserAccountId>,
    pub email: String,
    pub created_at: Timestamp,
    pub last_login_at: Timestamp,
    #[serde(
        default = "default_true",
        deserialize_with = "serde_helpers::bool_true"
    )]
    pub is_active: bool,
    #[serde(default, deserialize_with = "serde_helpers::bool_false")]
    pub is_admin: bool,
}

fn default_true() -> bool {
    true
}

impl UserAccount {
    /// The bare record key (shared with the employee profile)
    pub fn key(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.key().to_string())
    }
}

/// Update account payload (admin operations)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserAccountUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_admin: Option<bool>,
}
