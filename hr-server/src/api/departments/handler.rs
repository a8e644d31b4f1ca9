//! Department handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::core::ServerState;
use crate::db::models::{Department, DepartmentCreate, DepartmentUpdate};
use crate::db::repository::DepartmentRepository;
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_NOTE_LEN, validate_optional_text, validate_required_text,
};
use crate::utils::{AppError, AppResult};

pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Department>>> {
    let repo = DepartmentRepository::new(state.get_db());
    let departments = repo.find_all().await?;
    Ok(Json(departments))
}

pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Department>> {
    let repo = DepartmentRepository::new(state.get_db());
    let department = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Department {} not found", id)))?;
    Ok(Json(department))
}

/// Create a department (name must be unique)
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<DepartmentCreate>,
) -> AppResult<Json<Department>> {
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    validate_optional_text(&payload.description, "description", MAX_NOTE_LEN)?;

    let repo = DepartmentRepository::new(state.get_db());
    let department = repo.create(payload).await?;
    Ok(Json(department))
}

pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<DepartmentUpdate>,
) -> AppResult<Json<Department>> {
    if let Some(name) = &payload.name {
        validate_required_text(name, "name", MAX_NAME_LEN)?;
    }
    validate_optional_text(&payload.description, "description", MAX_NOTE_LEN)?;

    let repo = DepartmentRepository::new(state.get_db());
    let department = repo.update(&id, payload).await?;
    Ok(Json(department))
}

/// Delete a department (refused while jobs still reference it)
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    let repo = DepartmentRepository::new(state.get_db());
    let result = repo.delete(&id).await?;
    Ok(Json(result))
}
