//! Client-related types shared between server and client
//!
//! Common request/response types used in API communication.

use serde::{Deserialize, Serialize};

use crate::types::Timestamp;

// =============================================================================
// Auth API DTOs
// =============================================================================

/// Identity assertion supplied by the external identity provider at login
///
/// The four fields the provider asserts about the authenticated person.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityAssertion {
    /// External organization identifier (e.g. "EMP-1")
    pub id_number: String,
    pub given_name: String,
    pub last_name: String,
    pub email: String,
}

/// Login request
///
/// Carries the token issued by the identity provider after its own login
/// flow completed. The server verifies it and provisions the account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub provider_token: String,
}

/// Login response data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserInfo,
}

/// User information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: String,
    pub email: String,
    pub display_name: String,
    pub role: String,
    #[serde(default)]
    pub permissions: Vec<String>,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub last_login_at: Timestamp,
}
