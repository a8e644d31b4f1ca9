//! API Module
//!
//! # Structure
//!
//! - [`health`] - health check (public)
//! - [`auth`] - login, current user, logout
//! - [`accounts`] - user account administration (admin only)
//! - [`employees`] - employee profiles
//! - [`departments`] - department management
//! - [`jobs`] - job listings
//! - [`applications`] - job applications
//! - [`certifications`] - employee certifications
//! - [`documents`] - employee document storage

use axum::Router;
use http::{HeaderName, HeaderValue};
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{
    MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer,
};
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::core::ServerState;

pub mod accounts;
pub mod applications;
pub mod auth;
pub mod certifications;
pub mod departments;
pub mod documents;
pub mod employees;
pub mod health;
pub mod jobs;

/// Custom request ID generator
#[derive(Clone)]
struct XRequestId;

impl MakeRequestId for XRequestId {
    fn make_request_id<B>(&mut self, _request: &http::Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}

/// Build a router with all routes registered (no middleware, no state)
pub fn build_router() -> Router<ServerState> {
    Router::new()
        .merge(health::router())
        .merge(auth::router())
        .merge(accounts::router())
        .merge(employees::router())
        .merge(departments::router())
        .merge(jobs::router())
        .merge(applications::router())
        .merge(certifications::router())
        .merge(documents::router())
}

/// Build a fully configured application with all middleware
///
/// Used by both the HTTP server and the integration tests.
pub fn build_app(state: &ServerState) -> Router<ServerState> {
    build_router()
        // CORS - handle cross-origin requests
        .layer(CorsLayer::permissive())
        // Compression - gzip compress responses
        .layer(CompressionLayer::new())
        // Trace - request tracing (logs at INFO level)
        .layer(TraceLayer::new_for_http())
        // Request ID - unique ID per request, echoed on the response
        .layer(SetRequestIdLayer::new(
            HeaderName::from_static("x-request-id"),
            XRequestId,
        ))
        .layer(PropagateRequestIdLayer::new(HeaderName::from_static(
            "x-request-id",
        )))
        // JWT authentication - injects CurrentUser before routes run
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            crate::auth::require_auth,
        ))
}
