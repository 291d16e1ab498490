pub mod gas;
pub mod health;

pub use gas::*;
pub use health::*;

use axum::{
    routing::{get, post},
    Router,
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/gas/estimate", post(estimate_fee))
        .route("/api/gas/recommended", get(recommended_gas_price))
        .route("/api/gas/predict", post(predict_gas))
        .with_state(state)
}
