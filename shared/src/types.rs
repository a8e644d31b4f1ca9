//! Common types for the shared crate
//!
//! Flat HR enumerations shared between server and clients.

use serde::{Deserialize, Serialize};

/// Timestamp type (Unix milliseconds)
pub type Timestamp = i64;

/// Employment arrangement for a job listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmploymentType {
    FullTime,
    PartTime,
    Contract,
}

impl EmploymentType {
    pub fn description(&self) -> &'static str {
        match self {
            EmploymentType::FullTime => "Full-time employment",
            EmploymentType::PartTime => "Part-time employment",
            EmploymentType::Contract => "Contract employment",
        }
    }
}

/// Listing visibility: internal candidates, external candidates, or both
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobType {
    Internal,
    External,
    Both,
}

impl JobType {
    pub fn description(&self) -> &'static str {
        match self {
            JobType::Internal => "Visible to internal candidates only",
            JobType::External => "Visible to external candidates only",
            JobType::Both => "Visible to internal and external candidates",
        }
    }

    /// Whether a listing with this type is visible to the given audience
    pub fn visible_to_internal(&self) -> bool {
        matches!(self, JobType::Internal | JobType::Both)
    }

    pub fn visible_to_external(&self) -> bool {
        matches!(self, JobType::External | JobType::Both)
    }
}

/// Application status label
///
/// A plain label, not a guarded state machine: any status can be set at any
/// time via the API, matching the informal PENDING → SHORTLISTED | REJECTED |
/// HIRED flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    Pending,
    Shortlisted,
    Rejected,
    Hired,
}

impl ApplicationStatus {
    pub fn description(&self) -> &'static str {
        match self {
            ApplicationStatus::Pending => "Awaiting review",
            ApplicationStatus::Shortlisted => "Shortlisted for interview",
            ApplicationStatus::Rejected => "Not moving forward",
            ApplicationStatus::Hired => "Offer accepted",
        }
    }
}

impl Default for ApplicationStatus {
    fn default() -> Self {
        ApplicationStatus::Pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enum_wire_format() {
        let json = serde_json::to_string(&EmploymentType::FullTime).unwrap();
        assert_eq!(json, "\"full_time\"");

        let status: ApplicationStatus = serde_json::from_str("\"shortlisted\"").unwrap();
        assert_eq!(status, ApplicationStatus::Shortlisted);
    }

    #[test]
    fn test_job_type_visibility() {
        assert!(JobType::Both.visible_to_internal());
        assert!(JobType::Both.visible_to_external());
        assert!(JobType::Internal.visible_to_internal());
        assert!(!JobType::Internal.visible_to_external());
        assert!(!JobType::External.visible_to_internal());
    }
}
