//! User account administration handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::core::ServerState;
use crate::db::models::{UserAccount, UserAccountUpdate};
use crate::db::repository::UserAccountRepository;
use crate::utils::{AppError, AppResult};

/// List all accounts
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<UserAccount>>> {
    let repo = UserAccountRepository::new(state.get_db());
    let accounts = repo.find_all().await?;
    Ok(Json(accounts))
}

/// Get account by id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<UserAccount>> {
    let repo = UserAccountRepository::new(state.get_db());
    let account = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Account {} not found", id)))?;
    Ok(Json(account))
}

/// Update account flags (is_active / is_admin)
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<UserAccountUpdate>,
) -> AppResult<Json<UserAccount>> {
    let repo = UserAccountRepository::new(state.get_db());
    let account = repo.update(&id, payload).await?;
    Ok(Json(account))
}

/// Delete an account together with its employee profile
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    let repo = UserAccountRepository::new(state.get_db());
    let result = repo.delete(&id).await?;
    Ok(Json(result))
}
