// Copyright (c) 2025 SOLARE S.R.O.
//
// This file is part of WattCast.
//
// Licensed under the Creative Commons Attribution-NonCommercial-NoDerivatives 4.0 International
// (CC BY-NC-ND 4.0). You may use and share this file for non-commercial purposes only and you may not
// create derivatives. See <https://creativecommons.org/licenses/by-nc-nd/4.0/>.
//
// This software is provided "AS IS", without warranty of any kind.
//
// For commercial licensing, please contact: info@solare.cz

//! HTTP front end of the WattCast prediction engine

pub mod config;
pub mod error;
pub mod handlers;
pub mod validation;

use axum::Router;
use axum::routing::{get, post};
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

/// Build the application router with CORS and request tracing
pub fn build_router(config: &ServerConfig) -> Router {
    let api = Router::new()
        .route("/predict", post(handlers::predict_handler))
        .route("/shap", post(handlers::shap_handler))
        .route("/states", get(handlers::states_handler))
        .route("/states/{state}", get(handlers::state_detail_handler))
        .route("/appliances", get(handlers::appliances_handler));

    Router::new()
        .route("/", get(handlers::root_handler))
        .route("/health", get(handlers::health_handler))
        .nest("/api/v1", api)
        .layer(config.cors.layer())
        .layer(TraceLayer::new_for_http())
}
