//! The board client's HTTP gateway against the real router.
//!
//! Serves the app on an ephemeral port and talks to it through
//! `taskboard_client::http::HttpGateway`, so the wire shape of project
//! records and error bodies is checked end to end.

mod common;

use assert_matches::assert_matches;
use axum::http::StatusCode;
use axum::Router;
use common::{create_project, post_json_auth, register_and_login, TEST_PASSWORD};
use serde_json::json;
use sqlx::PgPool;
use taskboard_client::error::ClientError;
use taskboard_client::gateway::ProjectGateway;
use taskboard_client::http::HttpGateway;
use taskboard_core::status::ProjectStatus;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Serve `app` on `127.0.0.1:0` and return its base URL.
async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

// ---------------------------------------------------------------------------
// Successful calls
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_status_update_decodes_canonical_record(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = register_and_login(&app, "mover").await;
    let project = create_project(&app, &token, "Garden").await;
    let project_id = project["id"].as_i64().unwrap();
    let response = post_json_auth(
        app.clone(),
        &format!("/api/v1/projects/{project_id}/logs"),
        json!({ "content": "dug the beds" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let gateway = HttpGateway::new(serve(app).await).with_token(token);

    let updated = gateway
        .update_project_status(project_id, ProjectStatus::InProgress)
        .await
        .unwrap();

    assert_eq!(updated.id, project_id);
    assert_eq!(updated.title, "Garden");
    assert_eq!(updated.status, ProjectStatus::InProgress);
    assert_eq!(updated.logs.len(), 1);
    assert_eq!(updated.logs[0].content, "dug the beds");
    assert!(updated.reward.is_none());

    let listed = gateway.list_projects().await.unwrap();
    assert_eq!(listed, vec![updated]);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_stores_token_for_later_calls(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = register_and_login(&app, "reader").await;
    create_project(&app, &token, "Taxes").await;

    let mut gateway = HttpGateway::new(serve(app).await);
    gateway.login("reader", TEST_PASSWORD).await.unwrap();

    let projects = gateway.list_projects().await.unwrap();
    assert_eq!(projects.len(), 1);
    assert_eq!(projects[0].status, ProjectStatus::Todo);
}

// ---------------------------------------------------------------------------
// Failures
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_missing_project_is_api_not_found(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = register_and_login(&app, "mover").await;
    let gateway = HttpGateway::new(serve(app).await).with_token(token);

    let err = gateway
        .update_project_status(999_999, ProjectStatus::Complete)
        .await
        .unwrap_err();

    assert_matches!(err, ClientError::Api { status: 404, code, message } => {
        assert_eq!(code, "NOT_FOUND");
        assert_eq!(message, "Project with id 999999 not found");
    });
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_wrong_login_is_api_unauthorized(pool: PgPool) {
    let app = common::build_test_app(pool);
    register_and_login(&app, "reader").await;

    let mut gateway = HttpGateway::new(serve(app).await);
    let err = gateway.login("reader", "not-the-password").await.unwrap_err();

    assert_matches!(err, ClientError::Api { status: 401, code, .. } => {
        assert_eq!(code, "UNAUTHORIZED");
    });
    assert_matches!(
        gateway.list_projects().await,
        Err(ClientError::Api { status: 401, .. })
    );
}

#[tokio::test]
async fn test_unreachable_server_is_transport_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let gateway = HttpGateway::new(format!("http://{addr}")).with_token("unused");
    let err = gateway.list_projects().await.unwrap_err();

    assert_matches!(err, ClientError::Transport(_));
}
