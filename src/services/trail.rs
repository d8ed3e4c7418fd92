//! Trail services

use super::require_body;
use crate::core::{AppError, AppState};
use crate::dtos::{TrailDTO, UpsertTrailDTO};
use crate::repositories::{Create, Delete, Read, Update};
use axum::{
    extract::{Json, Path, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
};
use std::sync::Arc;
use tracing::{debug, error, info, instrument, warn};
use validator::Validate;

#[instrument(skip(state))]
pub async fn list_trails(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<TrailDTO>>, AppError> {
    debug!("Listing trails");
    let trails = state.trail.read_all().await?;
    info!("Found {} trails", trails.len());
    Ok(Json(trails.into_iter().map(TrailDTO::from).collect()))
}

/// Admin only, see the role layer in `create_router`
#[instrument(skip(state), fields(trail_id = %trail_id))]
pub async fn get_trail(
    State(state): State<Arc<AppState>>,
    Path(trail_id): Path<i32>,
) -> Result<Json<TrailDTO>, AppError> {
    debug!("Fetching trail by id");
    let trail = state.trail.read(&trail_id).await?.ok_or_else(|| {
        warn!("Trail not found");
        AppError::not_found("Trail not found")
    })?;
    Ok(Json(TrailDTO::from(trail)))
}

/// Trails of a park. An unknown park gives an empty list, not 404.
#[instrument(skip(state), fields(national_park_id = %national_park_id))]
pub async fn list_trails_in_national_park(
    State(state): State<Arc<AppState>>,
    Path(national_park_id): Path<i32>,
) -> Result<Json<Vec<TrailDTO>>, AppError> {
    debug!("Listing trails of national park");
    let trails = state.trail.read_in_national_park(&national_park_id).await?;
    info!("Found {} trails", trails.len());
    Ok(Json(trails.into_iter().map(TrailDTO::from).collect()))
}

#[instrument(skip(state, payload))]
pub async fn create_trail(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<Option<UpsertTrailDTO>>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    debug!("Creating trail");
    let body = require_body(payload)?;
    body.validate()?;

    if state.trail.exists_by_name(&body.name).await? {
        warn!("Trail {} already exists", body.name);
        return Err(AppError::not_found("Trail already exists")
            .with_details(format!("Trail having name {} already exists!", body.name)));
    }

    // an unknown national_park_id fails on the foreign key and ends up here
    let trail = state.trail.create(&body).await.map_err(|e| {
        error!("Failed to save trail: {:?}", e);
        AppError::internal_server_error("Something went wrong when saving the record")
            .with_details(format!("Something went wrong when saving the record {}.", body.name))
    })?;

    info!("Trail {} created", trail.id);
    let location = format!("/api/v1/trails/{}", trail.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(TrailDTO::from(trail)),
    ))
}

#[instrument(skip(state, payload), fields(trail_id = %trail_id))]
pub async fn update_trail(
    State(state): State<Arc<AppState>>,
    Path(trail_id): Path<i32>,
    payload: Result<Json<Option<UpsertTrailDTO>>, JsonRejection>,
) -> Result<StatusCode, AppError> {
    debug!("Updating trail");
    let body = require_body(payload)?;
    body.validate()?;

    if !state.trail.exists(&trail_id).await? {
        warn!("Trail not found");
        return Err(AppError::not_found("Trail not found")
            .with_details(format!("Trail with id {} does not exist!", trail_id)));
    }

    state.trail.update(&trail_id, &body).await.map_err(|e| {
        error!("Failed to update trail: {:?}", e);
        AppError::internal_server_error("Something went wrong while updating the record")
            .with_details(format!(
                "Something went wrong while updating the record {}.",
                body.name
            ))
    })?;

    info!("Trail updated");
    Ok(StatusCode::NO_CONTENT)
}

#[instrument(skip(state), fields(trail_id = %trail_id))]
pub async fn delete_trail(
    State(state): State<Arc<AppState>>,
    Path(trail_id): Path<i32>,
) -> Result<StatusCode, AppError> {
    debug!("Deleting trail");
    if !state.trail.exists(&trail_id).await? {
        warn!("Trail not found");
        return Err(AppError::not_found("Trail not found")
            .with_details(format!("Trail with id {} does not exist!", trail_id)));
    }

    state.trail.delete(&trail_id).await.map_err(|e| {
        error!("Failed to delete trail: {:?}", e);
        AppError::internal_server_error("Something went wrong while deleting the record")
            .with_details(format!(
                "Something went wrong while deleting the record with id {}.",
                trail_id
            ))
    })?;

    info!("Trail deleted");
    Ok(StatusCode::NO_CONTENT)
}
