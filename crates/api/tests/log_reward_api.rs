//! HTTP-level integration tests for progress logs and rewards.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, create_project, delete_auth, delete_json_auth, get_auth, patch_json_auth,
    post_json_auth, register_and_login, test_config, TEST_PASSWORD,
};
use serde_json::json;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Logs
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_log_lifecycle(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = register_and_login(&app, "owner").await;
    let project = create_project(&app, &token, "Garden").await;
    let base = format!("/api/v1/projects/{}", project["id"]);

    let response = post_json_auth(
        app.clone(),
        &format!("{base}/logs"),
        json!({ "content": "dug the beds" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let log = body_json(response).await;
    let log_uri = format!("{base}/logs/{}", log["id"]);

    let response = patch_json_auth(
        app.clone(),
        &log_uri,
        json!({ "content": "dug and watered the beds" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["content"], "dug and watered the beds");

    let detail = body_json(get_auth(app.clone(), &base, &token).await).await;
    assert_eq!(detail["logs"].as_array().unwrap().len(), 1);

    let response = delete_auth(app.clone(), &log_uri, &token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let detail = body_json(get_auth(app, &base, &token).await).await;
    assert_eq!(detail["logs"], json!([]));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_empty_log_is_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = register_and_login(&app, "owner").await;
    let project = create_project(&app, &token, "Garden").await;

    let response = post_json_auth(
        app,
        &format!("/api/v1/projects/{}/logs", project["id"]),
        json!({ "content": "  " }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_log_of_another_project_is_not_found(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = register_and_login(&app, "owner").await;
    let a = create_project(&app, &token, "A").await;
    let b = create_project(&app, &token, "B").await;

    let log = body_json(
        post_json_auth(
            app.clone(),
            &format!("/api/v1/projects/{}/logs", a["id"]),
            json!({ "content": "on A" }),
            &token,
        )
        .await,
    )
    .await;

    let response = delete_auth(
        app,
        &format!("/api/v1/projects/{}/logs/{}", b["id"], log["id"]),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Rewards
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_second_reward_conflicts(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = register_and_login(&app, "owner").await;
    let project = create_project(&app, &token, "Marathon").await;
    let uri = format!("/api/v1/projects/{}/reward", project["id"]);

    let response = post_json_auth(app.clone(), &uri, json!({ "description": "new shoes" }), &token).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = post_json_auth(app.clone(), &uri, json!({ "description": "more shoes" }), &token).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let detail = body_json(
        get_auth(app, &format!("/api/v1/projects/{}", project["id"]), &token).await,
    )
    .await;
    assert_eq!(detail["reward"]["description"], "new shoes");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_reward_edit_and_removal_require_password(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = register_and_login(&app, "owner").await;
    let project = create_project(&app, &token, "Marathon").await;
    let uri = format!("/api/v1/projects/{}/reward", project["id"]);
    post_json_auth(app.clone(), &uri, json!({ "description": "new shoes" }), &token).await;

    let response = patch_json_auth(app.clone(), &uri, json!({ "description": "a trip" }), &token).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = patch_json_auth(
        app.clone(),
        &uri,
        json!({ "description": "a trip", "password": TEST_PASSWORD }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["description"], "a trip");

    let response = delete_json_auth(app.clone(), &uri, json!({ "password": "wrong-guess" }), &token).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = delete_json_auth(app.clone(), &uri, json!({ "password": TEST_PASSWORD }), &token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = delete_json_auth(app, &uri, json!({ "password": TEST_PASSWORD }), &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_reward_overview_lists_callers_rewards(pool: PgPool) {
    let app = common::build_test_app(pool);
    let alice = register_and_login(&app, "alice").await;
    let bob = register_and_login(&app, "bob").await;

    for (token, title, reward) in [(&alice, "Marathon", "new shoes"), (&bob, "Other", "nope")] {
        let project = create_project(&app, token, title).await;
        post_json_auth(
            app.clone(),
            &format!("/api/v1/projects/{}/reward", project["id"]),
            json!({ "description": reward }),
            token,
        )
        .await;
    }

    let response = get_auth(app, "/api/v1/rewards", &alice).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let rewards = json.as_array().unwrap();
    assert_eq!(rewards.len(), 1);
    assert_eq!(rewards[0]["description"], "new shoes");
    assert_eq!(rewards[0]["project"]["title"], "Marathon");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_reward_can_require_completion(pool: PgPool) {
    let mut config = test_config();
    config.reward_requires_completion = true;
    let app = common::build_test_app_with(pool, config);
    let token = register_and_login(&app, "owner").await;
    let project = create_project(&app, &token, "Marathon").await;
    let project_uri = format!("/api/v1/projects/{}", project["id"]);

    let response = post_json_auth(
        app.clone(),
        &format!("{project_uri}/reward"),
        json!({ "description": "new shoes" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    patch_json_auth(app.clone(), &project_uri, json!({ "status": "complete" }), &token).await;

    let response = post_json_auth(
        app,
        &format!("{project_uri}/reward"),
        json!({ "description": "new shoes" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
}
