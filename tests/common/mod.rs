use axum_test::TestServer;
use parky_api::core::{AppState, encode_jwt};
use sqlx::SqlitePool;
use std::sync::Arc;

pub const JWT_SECRET: &str = "ilmiobellissimosegretochevaassolutamentecambiato";

/// Builds an AppState for the tests
///
/// Uses the test JWT secret and the cheapest bcrypt cost so hashing does not
/// dominate the test run.
pub fn create_test_state(pool: SqlitePool) -> Arc<AppState> {
    Arc::new(AppState::new(pool, JWT_SECRET.to_string()).with_bcrypt_cost(4))
}

/// Builds a TestServer around the full application router
pub fn create_test_server(state: Arc<AppState>) -> TestServer {
    let app = parky_api::create_router(state);
    TestServer::new(app).expect("Failed to create test server")
}

/// Signs a token for an existing user, the same way authentication does
pub fn create_test_jwt(user_id: i32, role: &str) -> String {
    encode_jwt(user_id, role, JWT_SECRET).expect("Failed to create JWT token")
}

/// Value for the Authorization header
pub fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}
