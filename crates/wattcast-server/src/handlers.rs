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

use axum::Json;
use axum::extract::Path;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use wattcast_core::{
    ApplianceArchetype, ApplianceEntry, FeatureImpact, PredictionResult, RegionProfile,
    appliances, regions,
};

use crate::error::{ApiError, ApiResult};
use crate::validation::{ValidationResult, validate_appliances, validate_bill_history};

/// Body of `/api/v1/predict` and `/api/v1/shap`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionRequest {
    pub state: String,
    pub bill_history: Vec<f64>,
    pub appliances: Vec<ApplianceEntry>,
}

impl PredictionRequest {
    pub fn validate(&self) -> ApiResult<()> {
        let mut result = ValidationResult::default();
        validate_bill_history(&self.bill_history, &mut result);
        validate_appliances(&self.appliances, &mut result);

        if result.is_valid() {
            Ok(())
        } else {
            warn!(
                state = %self.state,
                issues = result.errors.len(),
                "Prediction request rejected"
            );
            Err(ApiError::Validation(result.errors))
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ShapResponse {
    pub features: Vec<FeatureImpact>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ServiceInfo {
    pub message: String,
    pub version: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub server_time: DateTime<Utc>,
}

#[expect(clippy::unused_async, reason = "axum handler must be async")]
pub async fn root_handler() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        message: "Energy Prediction API".to_owned(),
        version: env!("CARGO_PKG_VERSION").to_owned(),
    })
}

#[expect(clippy::unused_async, reason = "axum handler must be async")]
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_owned(),
        server_time: Utc::now(),
    })
}

#[expect(clippy::unused_async, reason = "axum handler must be async")]
pub async fn predict_handler(
    Json(request): Json<PredictionRequest>,
) -> ApiResult<Json<PredictionResult>> {
    request.validate()?;
    debug!(state = %request.state, appliances = request.appliances.len(), "Predict requested");

    Ok(Json(wattcast_core::predict(
        &request.state,
        &request.bill_history,
        &request.appliances,
    )))
}

/// Runs a prediction first; the scores depend on its average monthly units
#[expect(clippy::unused_async, reason = "axum handler must be async")]
pub async fn shap_handler(Json(request): Json<PredictionRequest>) -> ApiResult<Json<ShapResponse>> {
    request.validate()?;

    let prediction =
        wattcast_core::predict(&request.state, &request.bill_history, &request.appliances);

    #[expect(
        clippy::cast_precision_loss,
        reason = "average monthly units are far below 2^52"
    )]
    let avg_monthly = prediction.avg_monthly as f64;

    let features = wattcast_core::explain(
        &request.state,
        &request.bill_history,
        &request.appliances,
        avg_monthly,
    );
    Ok(Json(ShapResponse { features }))
}

#[expect(clippy::unused_async, reason = "axum handler must be async")]
pub async fn states_handler() -> Json<Vec<&'static str>> {
    Json(regions::names())
}

#[expect(clippy::unused_async, reason = "axum handler must be async")]
pub async fn state_detail_handler(Path(state): Path<String>) -> ApiResult<Json<RegionProfile>> {
    regions::get(&state)
        .copied()
        .map(Json)
        .ok_or(ApiError::NotFound("State"))
}

#[expect(clippy::unused_async, reason = "axum handler must be async")]
pub async fn appliances_handler() -> Json<&'static [ApplianceArchetype]> {
    Json(appliances::catalog())
}
