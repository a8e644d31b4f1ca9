//! Authentication and authorization
//!
//! - [`JwtService`] - session token generation and validation
//! - [`IdentityVerifier`] - identity-provider token verification
//! - middleware: [`require_auth`], [`require_permission`], [`require_admin`]
//! - [`permissions`] - permission catalog and role defaults

pub mod identity;
pub mod jwt;
pub mod middleware;
pub mod permissions;

pub use identity::{IdentityVerifier, IdpConfig, ProviderClaims};
pub use jwt::{Claims, CurrentUser, JwtConfig, JwtError, JwtService};
pub use middleware::{require_admin, require_auth, require_permission};
pub use permissions::get_default_permissions;
