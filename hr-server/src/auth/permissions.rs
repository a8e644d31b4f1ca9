//! Permission Definitions
//!
//! Simplified RBAC: reads require authentication only; writes are gated by
//! module permissions. Account management is admin-only.

/// Configurable permission list
///
/// Does not include "accounts:manage" or "all"; those are admin-level.
pub const ALL_PERMISSIONS: &[&str] = &[
    "people:manage",       // employee profiles
    "settings:manage",     // departments
    "jobs:manage",         // job listings
    "applications:manage", // job applications
    "documents:manage",    // employee documents
];

/// Admin-level permissions (not in the configurable list)
pub const ADMIN_ONLY_PERMISSIONS: &[&str] = &[
    "accounts:manage", // account flags, deletion
    "all",             // everything
];

/// Default role permissions
pub const DEFAULT_ADMIN_PERMISSIONS: &[&str] = &["all"];

/// Regular staff can manage documents (their own uploads)
pub const DEFAULT_STAFF_PERMISSIONS: &[&str] = &["documents:manage"];

/// Get permissions for a role name
pub fn get_default_permissions(role_name: &str) -> Vec<String> {
    match role_name {
        "admin" => DEFAULT_ADMIN_PERMISSIONS
            .iter()
            .map(|s| s.to_string())
            .collect(),
        "staff" => DEFAULT_STAFF_PERMISSIONS
            .iter()
            .map(|s| s.to_string())
            .collect(),
        _ => vec![],
    }
}

/// Validate if a permission string is known
pub fn is_valid_permission(permission: &str) -> bool {
    ALL_PERMISSIONS.contains(&permission)
        || ADMIN_ONLY_PERMISSIONS.contains(&permission)
        || permission.ends_with(":*")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_defaults() {
        assert_eq!(get_default_permissions("admin"), vec!["all"]);
        assert_eq!(get_default_permissions("staff"), vec!["documents:manage"]);
        assert!(get_default_permissions("unknown").is_empty());
    }

    #[test]
    fn test_permission_catalog() {
        assert!(is_valid_permission("jobs:manage"));
        assert!(is_valid_permission("all"));
        assert!(is_valid_permission("jobs:*"));
        assert!(!is_valid_permission("orders:void"));
    }
}
