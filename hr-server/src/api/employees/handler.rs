//! Employee profile handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::core::ServerState;
use crate::db::models::{Employee, EmployeeUpdate};
use crate::db::repository::EmployeeRepository;
use crate::utils::validation::{MAX_SHORT_TEXT_LEN, validate_optional_text};
use crate::utils::{AppError, AppResult};

/// List all employee profiles
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Employee>>> {
    let repo = EmployeeRepository::new(state.get_db());
    let employees = repo.find_all().await?;
    Ok(Json(employees))
}

/// Get employee by id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Employee>> {
    let repo = EmployeeRepository::new(state.get_db());
    let employee = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Employee {} not found", id)))?;
    Ok(Json(employee))
}

/// Correct an employee profile
///
/// The next login overwrites these fields from the provider assertion again;
/// this endpoint exists for fixing records between logins.
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<EmployeeUpdate>,
) -> AppResult<Json<Employee>> {
    validate_optional_text(&payload.id_number, "id_number", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(&payload.first_name, "first_name", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(&payload.last_name, "last_name", MAX_SHORT_TEXT_LEN)?;

    let repo = EmployeeRepository::new(state.get_db());
    let employee = repo.update(&id, payload).await?;
    Ok(Json(employee))
}
