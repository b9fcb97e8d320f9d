//! Administrator request handlers.

use axum::Json;
use axum::extract::State;
use axum::http::{StatusCode, header::LOCATION};
use axum::response::{IntoResponse, Response};
use fleet_core::query::PageRequest;
use fleet_core::services::administrators;

use crate::AppState;
use crate::error::{AppError, AppResult};
use crate::extract::{JsonBody, PathParam, QueryParams};
use crate::models::{AdministratorRequest, AdministratorResponse, ListQuery, LoginRequest, LoginResponse};
use crate::services::auth;
use crate::validation::validate_administrator;

/// `POST /administrators/login`: authenticate with email + password.
pub async fn login_handler(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let resp = auth::login(
        &*state.store,
        &body.email,
        &body.password,
        state.config.jwt_secret.as_bytes(),
    )
    .await?;
    Ok(Json(resp))
}

/// `POST /administrators`: create an administrator.
pub async fn create_administrator_handler(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<AdministratorRequest>,
) -> AppResult<Response> {
    let administrator = validate_administrator(body)?;
    let created = administrators::add(&*state.store, administrator).await?;
    let location = format!("/administrators/{}", created.id);
    Ok((
        StatusCode::CREATED,
        [(LOCATION, location)],
        Json(AdministratorResponse::from(created)),
    )
        .into_response())
}

/// `GET /administrators?page=N`: list administrators, five per page.
pub async fn list_administrators_handler(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<ListQuery>,
) -> AppResult<Json<Vec<AdministratorResponse>>> {
    let page = PageRequest::listing(query.page, state.config.page_bounds);
    let records = administrators::get_all(&*state.store, &page).await?;
    Ok(Json(records.into_iter().map(AdministratorResponse::from).collect()))
}

/// `GET /administrators/{id}`: fetch one administrator.
pub async fn get_administrator_handler(
    State(state): State<AppState>,
    PathParam(id): PathParam<i32>,
) -> AppResult<Json<AdministratorResponse>> {
    administrators::get_by_id(&*state.store, id)
        .await?
        .map(|a| Json(AdministratorResponse::from(a)))
        .ok_or(AppError::NotFound("Administrator not found"))
}
