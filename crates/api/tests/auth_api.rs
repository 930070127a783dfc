//! HTTP-level integration tests for the auth endpoints.
//!
//! Tests cover login, token refresh and rotation, logout, account
//! lockout, and the `/auth/me` person mapping.

mod common;

use axum::http::StatusCode;
use common::{body_json, get_auth, post_json, post_json_auth};
use solea_api::auth::password::hash_password;
use solea_db::models::user::CreateUser;
use solea_db::repositories::UserRepo;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Create a test user directly in the database and return the user row plus
/// the plaintext password used.
async fn create_test_user(
    pool: &PgPool,
    username: &str,
    role: &str,
) -> (solea_db::models::user::User, String) {
    let password = "test_password_123!";
    let hashed = hash_password(password).expect("hashing should succeed");
    let input = CreateUser {
        username: username.to_string(),
        email: format!("{username}@test.com"),
        password_hash: hashed,
        role: role.to_string(),
    };
    let user = UserRepo::create(pool, &input)
        .await
        .expect("user creation should succeed");
    (user, password.to_string())
}

/// Log in a user via the API and return the JSON response containing
/// `access_token`, `refresh_token`, and `user` info.
async fn login_user(app: axum::Router, username: &str, password: &str) -> serde_json::Value {
    let body = serde_json::json!({ "username": username, "password": password });
    let response = post_json(app, "/api/v1/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await
}

// ---------------------------------------------------------------------------
// Auth flow tests
// ---------------------------------------------------------------------------

/// Successful login returns 200 with access_token, refresh_token, and user info.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_login_success(pool: PgPool) {
    let (user, password) = create_test_user(&pool, "loginuser", "admin").await;
    let app = common::build_test_app(pool);

    let json = login_user(app, "loginuser", &password).await;

    assert!(json["access_token"].is_string());
    assert!(json["refresh_token"].is_string());
    assert!(json["expires_in"].is_number());
    assert_eq!(json["user"]["id"], user.id);
    assert_eq!(json["user"]["username"], "loginuser");
    assert_eq!(json["user"]["email"], "loginuser@test.com");
    assert_eq!(json["user"]["role"], "admin");
}

/// Login with an incorrect password returns 401.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_login_wrong_password(pool: PgPool) {
    create_test_user(&pool, "wrongpw", "staff").await;
    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "username": "wrongpw", "password": "incorrect_password" });
    let response = post_json(app, "/api/v1/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// Login with an unknown username returns 401 with the same message shape.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_login_unknown_user(pool: PgPool) {
    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "username": "ghost", "password": "whatever" });
    let response = post_json(app, "/api/v1/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// Five consecutive failures lock the account; the next correct attempt is 403.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_account_lockout_after_failed_attempts(pool: PgPool) {
    let (_user, password) = create_test_user(&pool, "lockme", "staff").await;

    for _ in 0..5 {
        let response = post_json(
            common::build_test_app(pool.clone()),
            "/api/v1/auth/login",
            serde_json::json!({ "username": "lockme", "password": "bad_password" }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    let response = post_json(
        common::build_test_app(pool),
        "/api/v1/auth/login",
        serde_json::json!({ "username": "lockme", "password": password }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

/// Refreshing rotates the token: the new pair works, the old one is revoked.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_refresh_rotates_token(pool: PgPool) {
    let (_user, password) = create_test_user(&pool, "refresher", "staff").await;
    let json = login_user(common::build_test_app(pool.clone()), "refresher", &password).await;
    let refresh_token = json["refresh_token"].as_str().unwrap().to_string();

    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/v1/auth/refresh",
        serde_json::json!({ "refresh_token": refresh_token }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let refreshed = body_json(response).await;
    assert!(refreshed["access_token"].is_string());
    assert_ne!(refreshed["refresh_token"], json["refresh_token"]);

    // The old refresh token was revoked by the rotation.
    let response = post_json(
        common::build_test_app(pool),
        "/api/v1/auth/refresh",
        serde_json::json!({ "refresh_token": refresh_token }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// Logout revokes the caller's sessions.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_logout_revokes_sessions(pool: PgPool) {
    let (_user, password) = create_test_user(&pool, "leaver", "staff").await;
    let json = login_user(common::build_test_app(pool.clone()), "leaver", &password).await;
    let access_token = json["access_token"].as_str().unwrap();
    let refresh_token = json["refresh_token"].as_str().unwrap();

    let response = post_json_auth(
        common::build_test_app(pool.clone()),
        "/api/v1/auth/logout",
        serde_json::json!({}),
        access_token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = post_json(
        common::build_test_app(pool),
        "/api/v1/auth/refresh",
        serde_json::json!({ "refresh_token": refresh_token }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// Logout without a token is rejected.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_logout_requires_auth(pool: PgPool) {
    let response = post_json(
        common::build_test_app(pool),
        "/api/v1/auth/logout",
        serde_json::json!({}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// /auth/me maps the caller to their linked person record.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_me_returns_linked_person(pool: PgPool) {
    let (user, password) = create_test_user(&pool, "linked", "staff").await;
    let json = login_user(common::build_test_app(pool.clone()), "linked", &password).await;
    let access_token = json["access_token"].as_str().unwrap().to_string();

    // No person linked yet.
    let response = get_auth(
        common::build_test_app(pool.clone()),
        "/api/v1/auth/me",
        &access_token,
    )
    .await;
    let me = body_json(response).await;
    assert_eq!(me["user_id"], user.id);
    assert!(me["person"].is_null());

    // Link a person to the identity, then ask again.
    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/v1/people",
        serde_json::json!({"name": "Linked Person", "email": "linked@example.com", "user_id": user.id}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = get_auth(
        common::build_test_app(pool),
        "/api/v1/auth/me",
        &access_token,
    )
    .await;
    let me = body_json(response).await;
    assert_eq!(me["person"]["name"], "Linked Person");
}
