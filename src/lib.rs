//! Parky API - national parks and trails REST backend

pub mod core;
pub mod dtos;
pub mod entities;
pub mod repositories;
pub mod services;

// Re-export of the main types
pub use crate::core::{AppError, AppState, auth, config};
pub use services::root;

use axum::{
    Router, middleware,
    routing::{get, patch, post},
};
use std::sync::Arc;
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer, trace::TraceLayer};

/// Builds the application router
///
/// Routes are versioned by path: `/api/v1/...` exposes every resource,
/// `/api/v2/nationalparks` only the list endpoint.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(root))
        .nest("/api/v1", configure_v1_routes(state.clone()))
        .nest("/api/v2", configure_v2_routes())
        .layer(CatchPanicLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

fn configure_v1_routes(state: Arc<AppState>) -> Router<Arc<AppState>> {
    Router::new()
        .nest("/nationalparks", configure_national_park_routes(state.clone()))
        .nest("/trails", configure_trail_routes(state.clone()))
        .nest("/users", configure_user_routes(state))
}

fn configure_v2_routes() -> Router<Arc<AppState>> {
    use services::*;

    Router::new().route("/nationalparks", get(first_national_park))
}

/// National parks: reading a single park needs a valid token
fn configure_national_park_routes(state: Arc<AppState>) -> Router<Arc<AppState>> {
    use crate::core::authentication_middleware;
    use services::*;

    let public_routes = Router::new()
        .route("/", get(list_national_parks).post(create_national_park))
        .route(
            "/{national_park_id}",
            patch(update_national_park).delete(delete_national_park),
        );

    let protected_routes = Router::new()
        .route("/{national_park_id}", get(get_national_park))
        .route_layer(middleware::from_fn_with_state(
            state,
            authentication_middleware,
        ));

    public_routes.merge(protected_routes)
}

/// Trails: reading a single trail needs a token with the Admin role
fn configure_trail_routes(state: Arc<AppState>) -> Router<Arc<AppState>> {
    use crate::core::{ADMIN_ROLE, authentication_middleware, role_middleware};
    use services::*;

    let public_routes = Router::new()
        .route("/", get(list_trails).post(create_trail))
        .route(
            "/{trail_id}",
            patch(update_trail).delete(delete_trail),
        )
        .route(
            "/GetTrailsInNationPark/{national_park_id}",
            get(list_trails_in_national_park),
        );

    // the last layer added runs first: authentication, then the role check
    let admin_routes = Router::new()
        .route("/{trail_id}", get(get_trail))
        .route_layer(middleware::from_fn_with_state(ADMIN_ROLE, role_middleware))
        .route_layer(middleware::from_fn_with_state(
            state,
            authentication_middleware,
        ));

    public_routes.merge(admin_routes)
}

/// Users: authenticate and register are anonymous, everything else is not
fn configure_user_routes(state: Arc<AppState>) -> Router<Arc<AppState>> {
    use crate::core::authentication_middleware;
    use services::*;

    let anonymous_routes = Router::new()
        .route("/authenticate", post(authenticate_user))
        .route("/register", post(register_user));

    let protected_routes = Router::new()
        .route("/me", get(current_user))
        .route_layer(middleware::from_fn_with_state(
            state,
            authentication_middleware,
        ));

    anonymous_routes.merge(protected_routes)
}
