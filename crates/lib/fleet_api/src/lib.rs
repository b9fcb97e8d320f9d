//! # fleet_api
//!
//! HTTP API library for the Fleet API.

pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod validation;

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use fleet_core::store::FleetStore;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::ApiConfig;
use crate::handlers::{administrators, home, vehicles};

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Administrator and vehicle storage.
    pub store: Arc<dyn FleetStore>,
    /// API configuration.
    pub config: ApiConfig,
}

impl AppState {
    pub fn new(store: Arc<dyn FleetStore>, config: ApiConfig) -> Self {
        Self { store, config }
    }
}

/// Builds the Axum router with all routes and shared state.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Public routes (no auth required)
    let public = Router::new()
        .route(routes::HOME, get(home::home))
        .route(
            routes::ADMINISTRATORS_LOGIN,
            post(administrators::login_handler),
        );

    // Protected routes (require a valid bearer token)
    let protected = Router::new()
        .route(
            routes::ADMINISTRATORS,
            get(administrators::list_administrators_handler)
                .post(administrators::create_administrator_handler),
        )
        .route(
            routes::ADMINISTRATORS_ID,
            get(administrators::get_administrator_handler),
        )
        .route(
            routes::VEHICLES,
            get(vehicles::list_vehicles_handler).post(vehicles::create_vehicle_handler),
        )
        .route(
            routes::VEHICLES_ID,
            get(vehicles::get_vehicle_handler)
                .put(vehicles::update_vehicle_handler)
                .delete(vehicles::delete_vehicle_handler),
        )
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            middleware::auth::require_auth,
        ));

    Router::new()
        .merge(public)
        .merge(protected)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
