//! Certification handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;

use crate::core::ServerState;
use crate::db::models::{Certification, CertificationCreate, CertificationUpdate};
use crate::db::repository::CertificationRepository;
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, validate_required_text,
};
use crate::utils::{AppError, AppResult};

#[derive(Deserialize)]
pub struct ListQuery {
    /// Employee id ("employee:xyz")
    pub employee: String,
}

/// List certifications for one employee
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<Certification>>> {
    let repo = CertificationRepository::new(state.get_db());
    let certifications = repo.find_by_employee(&query.employee).await?;
    Ok(Json(certifications))
}

pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Certification>> {
    let repo = CertificationRepository::new(state.get_db());
    let certification = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Certification {} not found", id)))?;
    Ok(Json(certification))
}

pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<CertificationCreate>,
) -> AppResult<Json<Certification>> {
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    validate_required_text(&payload.issuer, "issuer", MAX_SHORT_TEXT_LEN)?;

    let repo = CertificationRepository::new(state.get_db());
    let certification = repo.create(payload).await?;
    Ok(Json(certification))
}

pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<CertificationUpdate>,
) -> AppResult<Json<Certification>> {
    if let Some(name) = &payload.name {
        validate_required_text(name, "name", MAX_NAME_LEN)?;
    }
    if let Some(issuer) = &payload.issuer {
        validate_required_text(issuer, "issuer", MAX_SHORT_TEXT_LEN)?;
    }

    let repo = CertificationRepository::new(state.get_db());
    let certification = repo.update(&id, payload).await?;
    Ok(Json(certification))
}

pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    let repo = CertificationRepository::new(state.get_db());
    let result = repo.delete(&id).await?;
    Ok(Json(result))
}
