use crate::{
    error::FeeLensError,
    models::{ApiResponse, GasEstimate, GasPrediction, RecommendedFee, TransactionRequest},
    services::{FeeEstimator, NetworkConnection},
};
use axum::{extract::State, Json};
use std::sync::Arc;
use std::time::Instant;

#[derive(Clone)]
pub struct AppState {
    pub connection: Arc<dyn NetworkConnection>,
    pub estimator: Arc<FeeEstimator>,
    pub data_source: String,
    pub started_at: Instant,
}

pub async fn estimate_fee(
    State(state): State<AppState>,
    Json(request): Json<TransactionRequest>,
) -> Result<Json<ApiResponse<GasEstimate>>, FeeLensError> {
    let estimate = state
        .estimator
        .estimate_transaction_fee(state.connection.as_ref(), &request)
        .await?;

    Ok(Json(ApiResponse::ok(estimate, state.data_source.clone())))
}

pub async fn recommended_gas_price(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<RecommendedFee>>, FeeLensError> {
    let recommended = state
        .estimator
        .recommended_gas_price(state.connection.as_ref())
        .await?;

    Ok(Json(ApiResponse::ok(recommended, state.data_source.clone())))
}

pub async fn predict_gas(
    State(state): State<AppState>,
    Json(request): Json<TransactionRequest>,
) -> Result<Json<ApiResponse<GasPrediction>>, FeeLensError> {
    let prediction = state
        .estimator
        .predict(state.connection.as_ref(), &request)
        .await?;

    Ok(Json(ApiResponse::ok(prediction, state.data_source.clone())))
}
