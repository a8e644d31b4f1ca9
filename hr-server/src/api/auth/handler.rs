//! Authentication handlers
//!
//! Login exchanges an identity-provider token for a local session JWT. The
//! provisioning step runs on every successful login, so the account and
//! employee profile always reflect the provider's latest assertion.

use axum::{Extension, Json, extract::State};
use shared::client::{LoginRequest, LoginResponse, UserInfo};

use crate::auth::{CurrentUser, get_default_permissions};
use crate::core::ServerState;
use crate::db::models::UserAccount;
use crate::security_log;
use crate::utils::{AppError, AppResponse, AppResult, ok};

/// Login handler
///
/// Verifies the identity-provider token, provisions the account/employee
/// pair and returns a session JWT.
pub async fn login(
    State(state): State<ServerState>,
    Json(req): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let assertion = state
        .identity_verifier()
        .verify(&req.provider_token)
        .map_err(|e| {
            security_log!("WARN", "login_rejected", error = format!("{}", e));
            AppError::invalid_token()
        })?;

    let account = state.provisioning().provision(&assertion).await?;

    if !account.is_active {
        security_log!("WARN", "login_disabled_account", email = assertion.email.clone());
        return Err(AppError::forbidden("Account has been disabled".to_string()));
    }

    // Full "user_account:key" form, same convention as the rest of the API
    let account_id = account
        .id
        .as_ref()
        .map(|id| id.to_string())
        .ok_or_else(|| AppError::internal("Provisioned account without id".to_string()))?;

    let role = role_for(&account);
    let permissions = get_default_permissions(role);
    let display_name = format!("{} {}", assertion.given_name, assertion.last_name);

    let token = state
        .get_jwt_service()
        .generate_token(
            &account_id,
            &account.email,
            &display_name,
            role,
            &permissions,
        )
        .map_err(|e| AppError::internal(format!("Token generation failed: {}", e)))?;

    security_log!(
        "INFO",
        "login_success",
        account_id = account_id.clone(),
        email = account.email.clone()
    );

    Ok(Json(LoginResponse {
        token,
        user: UserInfo {
            id: account_id,
            email: account.email,
            display_name,
            role: role.to_string(),
            permissions,
            is_active: account.is_active,
            created_at: account.created_at,
            last_login_at: account.last_login_at,
        },
    }))
}

/// Current user handler - echoes the authenticated user's claims
pub async fn me(Extension(user): Extension<CurrentUser>) -> Json<CurrentUserResponse> {
    Json(CurrentUserResponse {
        id: user.id,
        email: user.email,
        display_name: user.display_name,
        role: user.role,
        permissions: user.permissions,
    })
}

/// Logout handler
///
/// Tokens are stateless, so logout only records the event; clients discard
/// the token.
pub async fn logout(Extension(user): Extension<CurrentUser>) -> Json<AppResponse<()>> {
    security_log!(
        "INFO",
        "logout",
        account_id = user.id.clone(),
        email = user.email.clone()
    );
    ok(())
}

#[derive(serde::Serialize)]
pub struct CurrentUserResponse {
    pub id: String,
    pub email: String,
    pub display_name: String,
    pub role: String,
    pub permissions: Vec<String>,
}

fn role_for(account: &UserAccount) -> &'static str {
    if account.is_admin { "admin" } else { "staff" }
}
