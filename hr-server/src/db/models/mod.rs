//! Database Models

// Serde helpers
pub mod serde_helpers;

// Accounts
pub mod employee;
pub mod user_account;

// HR domain
pub mod application;
pub mod certification;
pub mod department;
pub mod document;
pub mod job;

// Re-exports
pub use application::{
    ApplicationCreate, ApplicationId, ApplicationStatusUpdate, ApplicationUpdate, JobApplication,
};
pub use certification::{Certification, CertificationCreate, CertificationId, CertificationUpdate};
pub use department::{Department, DepartmentCreate, DepartmentId, DepartmentUpdate};
pub use document::{DocumentId, DocumentRecord};
pub use employee::{Employee, EmployeeId, EmployeeUpdate};
pub use job::{JobCreate, JobId, JobListing, JobUpdate};
pub use user_account::{UserAccount, UserAccountId, UserAccountUpdate};
