//! Services
//!
//! Business logic above the repository layer.

pub mod provisioning;

pub use provisioning::ProvisioningService;
