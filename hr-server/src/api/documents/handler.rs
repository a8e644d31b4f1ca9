//! Employee document handlers

use axum::{
    Json,
    extract::{Multipart, Path, Query, State},
    http::header,
    response::IntoResponse,
};
use serde::Deserialize;
use sha2::{Digest, Sha256};
use std::path::PathBuf;
use uuid::Uuid;

use crate::core::ServerState;
use crate::db::models::DocumentRecord;
use crate::db::repository::{DocumentMeta, DocumentRepository};
use crate::utils::{AppError, AppResult};

#[derive(Deserialize)]
pub struct ListQuery {
    /// Employee id ("employee:xyz")
    pub employee: String,
}

/// List documents for one employee
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<DocumentRecord>>> {
    let repo = DocumentRepository::new(state.get_db());
    let documents = repo.find_by_employee(&query.employee).await?;
    Ok(Json(documents))
}

/// Upload a document for an employee (multipart field `file`)
pub async fn upload(
    State(state): State<ServerState>,
    Path(employee_id): Path<String>,
    mut multipart: Multipart,
) -> AppResult<Json<DocumentRecord>> {
    let repo = DocumentRepository::new(state.get_db());
    let employee = repo.parse_employee_id(&employee_id)?;

    let mut file: Option<(String, String, Vec<u8>)> = None;

    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some("file") {
            continue;
        }

        let original_name = field
            .file_name()
            .map(|s| s.to_string())
            .ok_or_else(|| AppError::validation("File name is required".to_string()))?;

        let content_type = field
            .content_type()
            .map(|s| s.to_string())
            .unwrap_or_else(|| {
                mime_guess::from_path(&original_name)
                    .first_or_octet_stream()
                    .to_string()
            });

        let data = field.bytes().await?.to_vec();
        file = Some((original_name, content_type, data));
        break;
    }

    let (original_name, content_type, data) =
        file.ok_or_else(|| AppError::validation("Missing multipart field 'file'".to_string()))?;

    if data.is_empty() {
        return Err(AppError::validation("Uploaded file is empty".to_string()));
    }
    if data.len() > state.config.max_document_size {
        return Err(AppError::validation(format!(
            "File too large ({} bytes, max {})",
            data.len(),
            state.config.max_document_size
        )));
    }

    let sha256 = calculate_hash(&data);

    // Stored name: random, keeps the original extension
    let ext = PathBuf::from(&original_name)
        .extension()
        .map(|e| format!(".{}", e.to_string_lossy()))
        .unwrap_or_default();
    let file_name = format!("{}{}", Uuid::new_v4(), ext);

    let documents_dir = state.config.documents_dir();
    std::fs::create_dir_all(&documents_dir)
        .map_err(|e| AppError::internal(format!("Failed to create documents dir: {}", e)))?;
    let file_path = documents_dir.join(&file_name);
    std::fs::write(&file_path, &data)
        .map_err(|e| AppError::internal(format!("Failed to store file: {}", e)))?;

    let meta = DocumentMeta {
        employee,
        file_name: file_name.clone(),
        original_name,
        content_type,
        size: data.len() as u64,
        sha256,
    };

    match repo.create(meta).await {
        Ok(document) => {
            tracing::info!(
                employee_id = %employee_id,
                file_name = %file_name,
                size = data.len(),
                "Document stored"
            );
            Ok(Json(document))
        }
        Err(e) => {
            // Keep disk and database in sync when the row fails
            let _ = std::fs::remove_file(&file_path);
            Err(e.into())
        }
    }
}

/// Download a document's bytes with its stored content type
pub async fn download(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let repo = DocumentRepository::new(state.get_db());
    let document = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Document {} not found", id)))?;

    let file_path = state.config.documents_dir().join(&document.file_name);
    let data = std::fs::read(&file_path)
        .map_err(|e| AppError::internal(format!("Failed to read stored file: {}", e)))?;

    let headers = [
        (header::CONTENT_TYPE, document.content_type.clone()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", document.original_name),
        ),
    ];

    Ok((headers, data))
}

/// Delete a document row and its file
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    let repo = DocumentRepository::new(state.get_db());
    let document = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Document {} not found", id)))?;

    let result = repo.delete(&id).await?;
    if result {
        let file_path = state.config.documents_dir().join(&document.file_name);
        if let Err(e) = std::fs::remove_file(&file_path) {
            // Orphaned file, not a failed request
            tracing::warn!(path = %file_path.display(), error = %e, "Failed to remove stored file");
        }
    }

    Ok(Json(result))
}

/// Calculate SHA256 hash of data
fn calculate_hash(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hex::encode(hasher.finalize())
}
