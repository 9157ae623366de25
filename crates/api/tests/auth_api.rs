//! HTTP-level integration tests for registration and login.

mod common;

use axum::http::StatusCode;
use common::{body_json, get_auth, post_json};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Registration
// ---------------------------------------------------------------------------

/// Successful registration returns 201 with the public user fields and no
/// password material.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_register_success(pool: PgPool) {
    let app = common::build_test_app(pool);

    let body = serde_json::json!({
        "name": "Ada",
        "email": "ada@example.com",
        "password": "correct-horse"
    });
    let response = post_json(&app, "/api/register", body).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert!(json["id"].is_string(), "response must contain a user id");
    assert_eq!(json["name"], "Ada");
    assert_eq!(json["email"], "ada@example.com");
    assert!(json["created_at"].is_string());
    assert!(
        json.get("password_hash").is_none() && json.get("password").is_none(),
        "password material must never be serialized"
    );
}

/// Registering the same email twice fails with 409, regardless of the
/// password used the second time.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_register_duplicate_email_conflicts(pool: PgPool) {
    let app = common::build_test_app(pool);

    let first = serde_json::json!({
        "name": "Ada",
        "email": "dup@example.com",
        "password": "first-password"
    });
    assert_eq!(
        post_json(&app, "/api/register", first).await.status(),
        StatusCode::CREATED
    );

    let second = serde_json::json!({
        "name": "Impostor",
        "email": "dup@example.com",
        "password": "a-completely-different-password"
    });
    let response = post_json(&app, "/api/register", second).await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let json = body_json(response).await;
    assert_eq!(json["code"], "CONFLICT");
}

/// Malformed registration input is rejected with 400 before any user is
/// created.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_register_validation(pool: PgPool) {
    let app = common::build_test_app(pool.clone());

    let cases = [
        serde_json::json!({ "name": "", "email": "a@example.com", "password": "long-enough" }),
        serde_json::json!({ "name": "Ada", "email": "not-an-email", "password": "long-enough" }),
        serde_json::json!({ "name": "Ada", "email": "a@example.com", "password": "short" }),
    ];
    for body in cases {
        let response = post_json(&app, "/api/register", body.clone()).await;
        assert_eq!(
            response.status(),
            StatusCode::BAD_REQUEST,
            "should reject {body}"
        );
    }

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(&pool)
        .await
        .expect("count should succeed");
    assert_eq!(count, 0, "no user may be created from invalid input");
}

// ---------------------------------------------------------------------------
// Login
// ---------------------------------------------------------------------------

/// Correct credentials return a usable session token and the registered
/// user's id.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_success(pool: PgPool) {
    let app = common::build_test_app(pool);

    let register = serde_json::json!({
        "name": "Ada",
        "email": "login@example.com",
        "password": "correct-horse"
    });
    let response = post_json(&app, "/api/register", register).await;
    let registered = body_json(response).await;

    let login = serde_json::json!({ "email": "login@example.com", "password": "correct-horse" });
    let response = post_json(&app, "/api/login", login).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert!(json["access_token"].is_string());
    assert!(json["expires_in"].is_number());
    assert_eq!(
        json["user"]["id"], registered["id"],
        "login must return the same user id registration produced"
    );

    // The issued token must be accepted by an authenticated route.
    let token = json["access_token"].as_str().unwrap();
    let response = get_auth(&app, "/api/notes", token).await;
    assert_eq!(response.status(), StatusCode::OK);
}

/// A wrong password is rejected with 401.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_wrong_password(pool: PgPool) {
    let app = common::build_test_app(pool);
    common::register_and_login(&app, "Ada", "wrongpw@example.com").await;

    let body = serde_json::json!({ "email": "wrongpw@example.com", "password": "incorrect" });
    let response = post_json(&app, "/api/login", body).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// An unknown email is rejected with the same 401 as a wrong password.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_unknown_email(pool: PgPool) {
    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "email": "ghost@example.com", "password": "whatever!" });
    let response = post_json(&app, "/api/login", body).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["code"], "UNAUTHORIZED");
}
