//! National park services

use super::require_body;
use crate::core::{AppError, AppState};
use crate::dtos::{NationalParkDTO, UpsertNationalParkDTO};
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
pub async fn list_national_parks(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<NationalParkDTO>>, AppError> {
    debug!("Listing national parks");
    let parks = state.national_park.read_all().await?;
    info!("Found {} national parks", parks.len());
    Ok(Json(parks.into_iter().map(NationalParkDTO::from).collect()))
}

/// v2 listing: answers with the first park only, `null` when there is none
#[instrument(skip(state))]
pub async fn first_national_park(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Option<NationalParkDTO>>, AppError> {
    debug!("Listing national parks (v2)");
    let first = state
        .national_park
        .read_all()
        .await?
        .into_iter()
        .next()
        .map(NationalParkDTO::from);
    Ok(Json(first))
}

#[instrument(skip(state), fields(national_park_id = %national_park_id))]
pub async fn get_national_park(
    State(state): State<Arc<AppState>>,
    Path(national_park_id): Path<i32>,
) -> Result<Json<NationalParkDTO>, AppError> {
    debug!("Fetching national park by id");
    let park = state.national_park.read(&national_park_id).await?.ok_or_else(|| {
        warn!("National park not found");
        AppError::not_found("National park not found")
    })?;
    Ok(Json(NationalParkDTO::from(park)))
}

#[instrument(skip(state, payload))]
pub async fn create_national_park(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<Option<UpsertNationalParkDTO>>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    debug!("Creating national park");
    let body = require_body(payload)?;
    body.validate()?;

    // 404 (not 409) on a name clash is part of the published contract
    if state.national_park.exists_by_name(&body.name).await? {
        warn!("National park {} already exists", body.name);
        return Err(AppError::not_found("National park already exists").with_details(format!(
            "National park having name {} already exists!",
            body.name
        )));
    }

    let park = state.national_park.create(&body).await.map_err(|e| {
        error!("Failed to save national park: {:?}", e);
        AppError::internal_server_error("Something went wrong when saving the record")
            .with_details(format!("Something went wrong when saving the record {}.", body.name))
    })?;

    info!("National park {} created", park.id);
    let location = format!("/api/v1/nationalparks/{}", park.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(NationalParkDTO::from(park)),
    ))
}

#[instrument(skip(state, payload), fields(national_park_id = %national_park_id))]
pub async fn update_national_park(
    State(state): State<Arc<AppState>>,
    Path(national_park_id): Path<i32>,
    payload: Result<Json<Option<UpsertNationalParkDTO>>, JsonRejection>,
) -> Result<StatusCode, AppError> {
    debug!("Updating national park");
    let body = require_body(payload)?;
    body.validate()?;

    if !state.national_park.exists(&national_park_id).await? {
        warn!("National park not found");
        return Err(AppError::not_found("National park not found").with_details(format!(
            "National park with id {} does not exist!",
            national_park_id
        )));
    }

    state
        .national_park
        .update(&national_park_id, &body)
        .await
        .map_err(|e| {
            error!("Failed to update national park: {:?}", e);
            AppError::internal_server_error("Something went wrong while updating the record")
                .with_details(format!(
                    "Something went wrong while updating the record {}.",
                    body.name
                ))
        })?;

    info!("National park updated");
    Ok(StatusCode::NO_CONTENT)
}

#[instrument(skip(state), fields(national_park_id = %national_park_id))]
pub async fn delete_national_park(
    State(state): State<Arc<AppState>>,
    Path(national_park_id): Path<i32>,
) -> Result<StatusCode, AppError> {
    debug!("Deleting national park");
    if !state.national_park.exists(&national_park_id).await? {
        warn!("National park not found");
        return Err(AppError::not_found("National park not found").with_details(format!(
            "National park with id {} does not exist!",
            national_park_id
        )));
    }

    state.national_park.delete(&national_park_id).await.map_err(|e| {
        error!("Failed to delete national park: {:?}", e);
        AppError::internal_server_error("Something went wrong while deleting the record")
            .with_details(format!(
                "Something went wrong while deleting the record with id {}.",
                national_park_id
            ))
    })?;

    info!("National park deleted");
    Ok(StatusCode::NO_CONTENT)
}
