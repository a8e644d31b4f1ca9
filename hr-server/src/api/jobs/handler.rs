//! Job listing handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;

use crate::core::ServerState;
use crate::db::models::{JobCreate, JobListing, JobUpdate};
use crate::db::repository::{Audience, JobRepository};
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_NOTE_LEN, validate_optional_text, validate_required_text,
};
use crate::utils::{AppError, AppResult};

#[derive(Deserialize)]
pub struct ListQuery {
    /// internal | external - filter open listings by audience
    pub audience: Option<String>,
}

/// List job listings, optionally filtered to what an audience may see
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<JobListing>>> {
    let repo = JobRepository::new(state.get_db());

    let jobs = match query.audience.as_deref() {
        Some(raw) => {
            let audience = Audience::parse(raw).ok_or_else(|| {
                AppError::validation(format!(
                    "Unknown audience '{}', expected internal or external",
                    raw
                ))
            })?;
            repo.find_open_for(audience).await?
        }
        None => repo.find_all().await?,
    };

    Ok(Json(jobs))
}

pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<JobListing>> {
    let repo = JobRepository::new(state.get_db());
    let job = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Job {} not found", id)))?;
    Ok(Json(job))
}

/// Create a job listing (department must exist)
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<JobCreate>,
) -> AppResult<Json<JobListing>> {
    validate_required_text(&payload.title, "title", MAX_NAME_LEN)?;
    validate_optional_text(&payload.description, "description", MAX_NOTE_LEN)?;

    let repo = JobRepository::new(state.get_db());
    let job = repo.create(payload).await?;
    Ok(Json(job))
}

pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<JobUpdate>,
) -> AppResult<Json<JobListing>> {
    if let Some(title) = &payload.title {
        validate_required_text(title, "title", MAX_NAME_LEN)?;
    }
    validate_optional_text(&payload.description, "description", MAX_NOTE_LEN)?;

    let repo = JobRepository::new(state.get_db());
    let job = repo.update(&id, payload).await?;
    Ok(Json(job))
}

/// Delete a job listing together with its applications
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    let repo = JobRepository::new(state.get_db());
    let result = repo.delete(&id).await?;
    Ok(Json(result))
}
