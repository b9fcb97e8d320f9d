//! Vehicle request handlers.

use axum::Json;
use axum::extract::State;
use axum::http::{StatusCode, header::LOCATION};
use axum::response::{IntoResponse, Response};
use fleet_core::models::Vehicle;
use fleet_core::query::PageRequest;
use fleet_core::services::vehicles;

use crate::AppState;
use crate::error::{AppError, AppResult};
use crate::extract::{JsonBody, PathParam, QueryParams};
use crate::models::{ListQuery, VehicleRequest};
use crate::validation::validate_vehicle;

const VEHICLE_NOT_FOUND: &str = "Vehicle not found";

/// `POST /vehicles`: create a vehicle.
pub async fn create_vehicle_handler(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<VehicleRequest>,
) -> AppResult<Response> {
    let draft = validate_vehicle(body)?;
    let created = vehicles::add(&*state.store, draft).await?;
    let location = format!("/vehicles/{}", created.id);
    Ok((StatusCode::CREATED, [(LOCATION, location)], Json(created)).into_response())
}

/// `GET /vehicles?page=N&name=..&brand=..`: list vehicles, five per page.
pub async fn list_vehicles_handler(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<ListQuery>,
) -> AppResult<Json<Vec<Vehicle>>> {
    let page = PageRequest::listing(query.page, state.config.page_bounds);
    let records = vehicles::get_all(
        &*state.store,
        &page,
        query.name.as_deref(),
        query.brand.as_deref(),
    )
    .await?;
    Ok(Json(records))
}

/// `GET /vehicles/{id}`: fetch one vehicle.
pub async fn get_vehicle_handler(
    State(state): State<AppState>,
    PathParam(id): PathParam<i32>,
) -> AppResult<Json<Vehicle>> {
    vehicles::get_by_id(&*state.store, id)
        .await?
        .map(Json)
        .ok_or(AppError::NotFound(VEHICLE_NOT_FOUND))
}

/// `PUT /vehicles/{id}`: replace a vehicle's fields.
///
/// Existence is checked before the body is validated.
pub async fn update_vehicle_handler(
    State(state): State<AppState>,
    PathParam(id): PathParam<i32>,
    JsonBody(body): JsonBody<VehicleRequest>,
) -> AppResult<Json<Vehicle>> {
    if vehicles::get_by_id(&*state.store, id).await?.is_none() {
        return Err(AppError::NotFound(VEHICLE_NOT_FOUND));
    }
    let draft = validate_vehicle(body)?;
    vehicles::update(&*state.store, id, draft)
        .await?
        .map(Json)
        .ok_or(AppError::NotFound(VEHICLE_NOT_FOUND))
}

/// `DELETE /vehicles/{id}`: remove a vehicle.
pub async fn delete_vehicle_handler(
    State(state): State<AppState>,
    PathParam(id): PathParam<i32>,
) -> AppResult<StatusCode> {
    if vehicles::delete(&*state.store, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(VEHICLE_NOT_FOUND))
    }
}
