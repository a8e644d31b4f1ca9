//! HTTP API integration tests
//!
//! Builds the full application (router + middleware) over a temporary
//! database and drives it with oneshot requests.

use axum::Router;
use axum::body::{Body, to_bytes};
use chrono::Utc;
use http::{Request, StatusCode, header};
use jsonwebtoken::{EncodingKey, Header, encode};
use tempfile::TempDir;
use tower::ServiceExt;

use hr_server::auth::ProviderClaims;
use hr_server::db::repository::UserAccountRepository;
use hr_server::db::models::UserAccountUpdate;
use hr_server::{Config, ServerState};

const IDP_SECRET: &str = "idp-integration-test-secret-0123456789abcdef";

async fn test_app() -> (Router, ServerState, TempDir) {
    let dir = TempDir::new().expect("temp dir");
    let mut config = Config::with_overrides(dir.path().to_string_lossy().to_string(), 0);
    config.jwt.secret = "jwt-integration-test-secret-0123456789abcdef".to_string();
    config.idp.secret = IDP_SECRET.to_string();

    let state = ServerState::initialize(&config).await.expect("state");
    let app = hr_server::api::build_app(&state).with_state(state.clone());
    (app, state, dir)
}

fn provider_token(state: &ServerState, id_number: &str, first: &str, last: &str, email: &str) -> String {
    let now = Utc::now().timestamp();
    let claims = ProviderClaims {
        sub: id_number.to_string(),
        given_name: first.to_string(),
        family_name: last.to_string(),
        email: email.to_string(),
        exp: now + 300,
        iat: now,
        iss: state.config.idp.issuer.clone(),
        aud: state.config.idp.audience.clone(),
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(IDP_SECRET.as_bytes()),
    )
    .expect("sign provider token")
}

async fn login(app: &Router, state: &ServerState, email: &str) -> String {
    let token = provider_token(state, "EMP-1", "Jane", "Doe", email);
    let response = app
        .clone()
        .oneshot(
            Request::post("/api/auth/login")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(format!(
                    r#"{{"provider_token":"{token}"}}"#
                )))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    json["token"].as_str().expect("session token").to_string()
}

async fn get_json(app: &Router, path: &str, token: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .clone()
        .oneshot(
            Request::get(path)
                .header(header::AUTHORIZATION, format!("Bearer {token}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null);
    (status, json)
}

#[tokio::test]
async fn test_health_is_public() {
    let (app, _state, _dir) = test_app().await;

    let response = app
        .oneshot(Request::get("/api/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["status"], "ok");
}

#[tokio::test]
async fn test_api_requires_authentication() {
    let (app, _state, _dir) = test_app().await;

    let response = app
        .oneshot(Request::get("/api/employees").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["code"], "E3001");
}

#[tokio::test]
async fn test_garbage_provider_token_rejected() {
    let (app, _state, _dir) = test_app().await;

    let response = app
        .oneshot(
            Request::post("/api/auth/login")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"provider_token":"not-a-jwt"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_login_provisions_and_issues_session() {
    let (app, state, _dir) = test_app().await;

    let session = login(&app, &state, "jane@x.com").await;

    // The session token works against protected routes
    let (status, me) = get_json(&app, "/api/auth/me", &session).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(me["email"], "jane@x.com");
    assert_eq!(me["role"], "staff");
    assert_eq!(me["display_name"], "Jane Doe");

    // Provisioning created the employee profile
    let (status, employees) = get_json(&app, "/api/employees", &session).await;
    assert_eq!(status, StatusCode::OK);
    let employees = employees.as_array().expect("employee list");
    assert_eq!(employees.len(), 1);
    assert_eq!(employees[0]["id_number"], "EMP-1");
    assert_eq!(employees[0]["first_name"], "Jane");
}

#[tokio::test]
async fn test_staff_cannot_manage_departments() {
    let (app, state, _dir) = test_app().await;
    let session = login(&app, &state, "jane@x.com").await;

    let response = app
        .oneshot(
            Request::post("/api/departments")
                .header(header::AUTHORIZATION, format!("Bearer {session}"))
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"name":"Engineering"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_admin_manages_departments() {
    let (app, state, _dir) = test_app().await;

    // First login creates the account as staff; promote it, then log in
    // again so the new role lands in the session token.
    let _ = login(&app, &state, "jane@x.com").await;
    let repo = UserAccountRepository::new(state.get_db());
    let account = repo
        .find_by_email("jane@x.com")
        .await
        .expect("query")
        .expect("account");
    let account_id = account.id.as_ref().expect("id").to_string();
    repo.update(
        &account_id,
        UserAccountUpdate {
            is_active: None,
            is_admin: Some(true),
        },
    )
    .await
    .expect("promote");

    let session = login(&app, &state, "jane@x.com").await;

    let response = app
        .clone()
        .oneshot(
            Request::post("/api/departments")
                .header(header::AUTHORIZATION, format!("Bearer {session}"))
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"name":"Engineering"}"#))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // Duplicate name is a conflict
    let response = app
        .clone()
        .oneshot(
            Request::post("/api/departments")
                .header(header::AUTHORIZATION, format!("Bearer {session}"))
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"name":"Engineering"}"#))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let (status, departments) = get_json(&app, "/api/departments", &session).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(departments.as_array().expect("list").len(), 1);
}

#[tokio::test]
async fn test_unknown_job_audience_rejected() {
    let (app, state, _dir) = test_app().await;
    let session = login(&app, &state, "jane@x.com").await;

    let (status, _) = get_json(&app, "/api/jobs?audience=martians", &session).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, jobs) = get_json(&app, "/api/jobs?audience=internal", &session).await;
    assert_eq!(status, StatusCode::OK);
    assert!(jobs.as_array().expect("list").is_empty());
}

#[tokio::test]
async fn test_document_upload_download_delete_roundtrip() {
    let (app, state, _dir) = test_app().await;
    let session = login(&app, &state, "jane@x.com").await;

    // Provisioning created the profile; documents attach to it
    let (status, employees) = get_json(&app, "/api/employees", &session).await;
    assert_eq!(status, StatusCode::OK);
    let employee_id = employees[0]["id"].as_str().expect("employee id").to_string();

    let boundary = "hr-test-boundary";
    let file_body = format!(
        "--{boundary}\r\n\
         Content-Disposition: form-data; name=\"file\"; filename=\"contract.pdf\"\r\n\
         Content-Type: application/pdf\r\n\r\n\
         dummy pdf bytes\r\n\
         --{boundary}--\r\n"
    );

    // Upload and delete share the /{id} route; upload must not clash with it
    let response = app
        .clone()
        .oneshot(
            Request::post(format!("/api/documents/{employee_id}"))
                .header(header::AUTHORIZATION, format!("Bearer {session}"))
                .header(
                    header::CONTENT_TYPE,
                    format!("multipart/form-data; boundary={boundary}"),
                )
                .body(Body::from(file_body))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let document: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(document["original_name"], "contract.pdf");
    assert_eq!(document["content_type"], "application/pdf");
    let document_id = document["id"].as_str().expect("document id").to_string();

    let (status, listed) =
        get_json(&app, &format!("/api/documents?employee={employee_id}"), &session).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed.as_array().expect("list").len(), 1);

    let response = app
        .clone()
        .oneshot(
            Request::get(format!("/api/documents/{document_id}/download"))
                .header(header::AUTHORIZATION, format!("Bearer {session}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "application/pdf"
    );
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&bytes[..], b"dummy pdf bytes");

    let response = app
        .clone()
        .oneshot(
            Request::delete(format!("/api/documents/{document_id}"))
                .header(header::AUTHORIZATION, format!("Bearer {session}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let (status, listed) =
        get_json(&app, &format!("/api/documents?employee={employee_id}"), &session).await;
    assert_eq!(status, StatusCode::OK);
    assert!(listed.as_array().expect("list").is_empty());
}

#[tokio::test]
async fn test_accounts_surface_is_admin_only() {
    let (app, state, _dir) = test_app().await;
    let session = login(&app, &state, "jane@x.com").await;

    let (status, _) = get_json(&app, "/api/accounts", &session).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}
