//! Employee document routes
//!
//! File bytes live on disk under `work_dir/documents/`; the database keeps
//! metadata rows only.
//!
//! | Path | Method | Permission |
//! |------|--------|------------|
//! | /api/documents?employee= | GET | authenticated |
//! | /api/documents/{id}/download | GET | authenticated |
//! | /api/documents/{id} | POST (multipart, {id} = employee) | documents:manage |
//! | /api/documents/{id} | DELETE ({id} = document) | documents:manage |

mod handler;

use axum::{Router, middleware, routing::get, routing::post};

use crate::auth::require_permission;
use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/documents", routes())
}

fn routes() -> Router<ServerState> {
    let read_routes = Router::new()
        .route("/", get(handler::list))
        .route("/{id}/download", get(handler::download));

    // One parameter name throughout: conflicting names in the same path
    // position make the router panic at construction.
    let manage_routes = Router::new()
        .route("/{id}", post(handler::upload).delete(handler::delete))
        .layer(middleware::from_fn(require_permission("documents:manage")));

    read_routes.merge(manage_routes)
}
