//! Authentication routes
//!
//! | Path | Method | Auth |
//! |------|--------|------|
//! | /api/auth/login | POST | none (provider token in body) |
//! | /api/auth/me | GET | bearer token |
//! | /api/auth/logout | POST | bearer token |

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/auth/login", post(handler::login))
        .route("/api/auth/me", get(handler::me))
        .route("/api/auth/logout", post(handler::logout))
}
