//! Job application handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;

use crate::core::ServerState;
use crate::db::models::{
    ApplicationCreate, ApplicationStatusUpdate, ApplicationUpdate, JobApplication,
};
use crate::db::repository::ApplicationRepository;
use crate::utils::validation::{MAX_SHORT_TEXT_LEN, validate_email, validate_required_text};
use crate::utils::{AppError, AppResult};

#[derive(Deserialize)]
pub struct ListQuery {
    /// Filter by job id ("job:xyz")
    pub job: Option<String>,
}

/// List applications, optionally for one job
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<JobApplication>>> {
    let repo = ApplicationRepository::new(state.get_db());
    let applications = match query.job.as_deref() {
        Some(job_id) => repo.find_by_job(job_id).await?,
        None => repo.find_all().await?,
    };
    Ok(Json(applications))
}

pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<JobApplication>> {
    let repo = ApplicationRepository::new(state.get_db());
    let application = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Application {} not found", id)))?;
    Ok(Json(application))
}

/// Record an application (always starts as pending)
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<ApplicationCreate>,
) -> AppResult<Json<JobApplication>> {
    validate_required_text(&payload.candidate_name, "candidate_name", MAX_SHORT_TEXT_LEN)?;
    validate_email(&payload.candidate_email, "candidate_email")?;

    let repo = ApplicationRepository::new(state.get_db());
    let application = repo.create(payload).await?;
    Ok(Json(application))
}

pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<ApplicationUpdate>,
) -> AppResult<Json<JobApplication>> {
    if let Some(name) = &payload.candidate_name {
        validate_required_text(name, "candidate_name", MAX_SHORT_TEXT_LEN)?;
    }
    if let Some(email) = &payload.candidate_email {
        validate_email(email, "candidate_email")?;
    }

    let repo = ApplicationRepository::new(state.get_db());
    let application = repo.update(&id, payload).await?;
    Ok(Json(application))
}

/// Set application status
///
/// Any status may be set at any time; recruiters reverse decisions, so no
/// transition order is enforced.
pub async fn set_status(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<ApplicationStatusUpdate>,
) -> AppResult<Json<JobApplication>> {
    let repo = ApplicationRepository::new(state.get_db());
    let application = repo.set_status(&id, payload.status).await?;
    Ok(Json(application))
}

pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    let repo = ApplicationRepository::new(state.get_db());
    let result = repo.delete(&id).await?;
    Ok(Json(result))
}
