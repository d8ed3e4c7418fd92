//! Integration tests for the user endpoints
//!
//! Covers:
//! - POST /api/v1/users/register
//! - POST /api/v1/users/authenticate
//! - GET /api/v1/users/me
//! - GET / (health check)

mod common;

#[cfg(test)]
mod user_tests {
    use super::common::*;
    use axum::http::HeaderName;
    use serde_json::{Value, json};
    use sqlx::SqlitePool;

    const REGISTER: &str = "/api/v1/users/register";
    const AUTHENTICATE: &str = "/api/v1/users/authenticate";

    fn credentials(username: &str, password: &str) -> Value {
        json!({ "username": username, "password": password })
    }

    // ============================================================
    // POST /api/v1/users/register
    // ============================================================

    #[sqlx::test]
    async fn test_register_user(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_test_server(create_test_state(pool));

        let response = server.post(REGISTER).json(&credentials("alice", "secret")).await;

        response.assert_status_ok();
        let user: Value = response.json();
        assert_eq!(user["username"], "alice");
        assert_eq!(user["password"], "");
        assert_eq!(user["role"], "Admin");
        assert!(user["token"].is_null());
        Ok(())
    }

    #[sqlx::test]
    async fn test_register_taken_username(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_test_server(create_test_state(pool.clone()));

        server
            .post(REGISTER)
            .json(&credentials("alice", "secret"))
            .await
            .assert_status_ok();

        let response = server
            .post(REGISTER)
            .json(&credentials(" Alice ", "another"))
            .await;

        response.assert_status_bad_request();
        let error: Value = response.json();
        assert_eq!(error["message"], "Username already exist");

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&pool)
            .await?;
        assert_eq!(count, 1);
        Ok(())
    }

    #[sqlx::test]
    async fn test_register_unicode_case_or_control_whitespace_variant(
        pool: SqlitePool,
    ) -> sqlx::Result<()> {
        let server = create_test_server(create_test_state(pool.clone()));

        for username in ["alice", "Zoë"] {
            server
                .post(REGISTER)
                .json(&credentials(username, "secret"))
                .await
                .assert_status_ok();
        }

        for taken in ["alice\n", "\talice", "ZOË"] {
            let response = server.post(REGISTER).json(&credentials(taken, "other")).await;
            response.assert_status_bad_request();
            let error: Value = response.json();
            assert_eq!(error["message"], "Username already exist", "{taken:?}");
        }

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&pool)
            .await?;
        assert_eq!(count, 2);
        Ok(())
    }

    #[sqlx::test]
    async fn test_register_with_invalid_body(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_test_server(create_test_state(pool));

        server
            .post(REGISTER)
            .json(&Value::Null)
            .await
            .assert_status_bad_request();

        server
            .post(REGISTER)
            .json(&json!({ "username": "alice" }))
            .await
            .assert_status_bad_request();

        server
            .post(REGISTER)
            .json(&credentials("alice", ""))
            .await
            .assert_status_bad_request();

        server
            .post(REGISTER)
            .json(&credentials(" \t", "secret"))
            .await
            .assert_status_bad_request();
        Ok(())
    }

    // ============================================================
    // POST /api/v1/users/authenticate
    // ============================================================

    #[sqlx::test]
    async fn test_authenticate_returns_token(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_test_server(create_test_state(pool));
        server
            .post(REGISTER)
            .json(&credentials("alice", "secret"))
            .await
            .assert_status_ok();

        let response = server
            .post(AUTHENTICATE)
            .json(&credentials("alice", "secret"))
            .await;

        response.assert_status_ok();
        let user: Value = response.json();
        assert_eq!(user["username"], "alice");
        assert_eq!(user["password"], "");
        let token = user["token"].as_str().expect("token should be issued");
        assert!(!token.is_empty());
        Ok(())
    }

    #[sqlx::test]
    async fn test_authenticate_wrong_password(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_test_server(create_test_state(pool));
        server
            .post(REGISTER)
            .json(&credentials("alice", "secret"))
            .await
            .assert_status_ok();

        let response = server
            .post(AUTHENTICATE)
            .json(&credentials("alice", "wrong"))
            .await;

        response.assert_status_bad_request();
        let error: Value = response.json();
        assert_eq!(error["message"], "Username or Password is incorrect.");
        Ok(())
    }

    #[sqlx::test]
    async fn test_authenticate_unknown_user(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_test_server(create_test_state(pool));

        let response = server
            .post(AUTHENTICATE)
            .json(&credentials("nobody", "secret"))
            .await;

        response.assert_status_bad_request();
        let error: Value = response.json();
        assert_eq!(error["message"], "Username or Password is incorrect.");
        Ok(())
    }

    #[sqlx::test]
    async fn test_authenticate_with_null_body(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_test_server(create_test_state(pool));

        let response = server.post(AUTHENTICATE).json(&Value::Null).await;

        response.assert_status_bad_request();
        Ok(())
    }

    // ============================================================
    // Issued tokens against protected routes
    // ============================================================

    #[sqlx::test(fixtures(path = "../fixtures", scripts("national_parks", "trails")))]
    async fn test_issued_token_opens_protected_routes(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_test_server(create_test_state(pool));
        server
            .post(REGISTER)
            .json(&credentials("alice", "secret"))
            .await
            .assert_status_ok();
        let user: Value = server
            .post(AUTHENTICATE)
            .json(&credentials("alice", "secret"))
            .await
            .json();
        let token = user["token"].as_str().unwrap().to_string();

        server
            .get("/api/v1/nationalparks/1")
            .add_header(HeaderName::from_static("authorization"), bearer(&token))
            .await
            .assert_status_ok();

        // registered users are admins
        server
            .get("/api/v1/trails/1")
            .add_header(HeaderName::from_static("authorization"), bearer(&token))
            .await
            .assert_status_ok();
        Ok(())
    }

    // ============================================================
    // GET /api/v1/users/me
    // ============================================================

    #[sqlx::test(fixtures(path = "../fixtures", scripts("users")))]
    async fn test_current_user(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_test_server(create_test_state(pool));
        let token = create_test_jwt(2, "Visitor");

        let response = server
            .get("/api/v1/users/me")
            .add_header(HeaderName::from_static("authorization"), bearer(&token))
            .await;

        response.assert_status_ok();
        let user: Value = response.json();
        assert_eq!(user["id"], 2);
        assert_eq!(user["username"], "visitor");
        assert_eq!(user["password"], "");
        Ok(())
    }

    #[sqlx::test]
    async fn test_current_user_without_token(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_test_server(create_test_state(pool));

        let response = server.get("/api/v1/users/me").await;

        response.assert_status_unauthorized();
        Ok(())
    }

    // ============================================================
    // GET /
    // ============================================================

    #[sqlx::test]
    async fn test_root(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_test_server(create_test_state(pool));

        server.get("/").await.assert_status_ok();
        Ok(())
    }
}
