//! Shared types for the HR backend
//!
//! Wire types used by both the server and API clients: the flat HR
//! enumerations and the auth request/response DTOs.

pub mod client;
pub mod types;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use client::{IdentityAssertion, LoginRequest, LoginResponse, UserInfo};
pub use types::{ApplicationStatus, EmploymentType, JobType, Timestamp};
