use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use ethers::providers::{ProviderError, RpcError};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FeeLensError {
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Invalid transaction data: {0}")]
    InvalidPayload(String),

    #[error("Network unavailable: {0}")]
    NetworkUnavailable(String),

    #[error("Gas estimation failed: {0}")]
    EstimationFailed(String),

    #[error("Network exposed neither a legacy gas price nor a max fee per gas")]
    InsufficientFeeData,
}

impl FeeLensError {
    // A JSON-RPC error response means the node answered and rejected the call
    // (typically a revert). Anything else means it never answered.
    pub fn from_simulation(err: ProviderError) -> Self {
        match err.as_error_response() {
            Some(rpc) => FeeLensError::EstimationFailed(rpc.message.clone()),
            None => FeeLensError::NetworkUnavailable(err.to_string()),
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            FeeLensError::InvalidAddress(_) => "INVALID_ADDRESS",
            FeeLensError::InvalidAmount(_) => "INVALID_AMOUNT",
            FeeLensError::InvalidPayload(_) => "INVALID_PAYLOAD",
            FeeLensError::NetworkUnavailable(_) => "NETWORK_UNAVAILABLE",
            FeeLensError::EstimationFailed(_) => "ESTIMATION_FAILED",
            FeeLensError::InsufficientFeeData => "INSUFFICIENT_FEE_DATA",
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            FeeLensError::InvalidAddress(_)
            | FeeLensError::InvalidAmount(_)
            | FeeLensError::InvalidPayload(_) => StatusCode::BAD_REQUEST,
            FeeLensError::EstimationFailed(_) => StatusCode::UNPROCESSABLE_ENTITY,
            FeeLensError::NetworkUnavailable(_) | FeeLensError::InsufficientFeeData => {
                StatusCode::BAD_GATEWAY
            }
        }
    }
}

impl From<ProviderError> for FeeLensError {
    fn from(err: ProviderError) -> Self {
        FeeLensError::NetworkUnavailable(err.to_string())
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
    pub error_code: String,
    pub timestamp: chrono::DateTime<Utc>,
    pub request_id: String,
}

impl IntoResponse for FeeLensError {
    fn into_response(self) -> Response {
        let status = self.status();
        let error_code = self.error_code();

        let body = ErrorResponse {
            success: false,
            error: self.to_string(),
            error_code: error_code.to_string(),
            timestamp: Utc::now(),
            request_id: Uuid::new_v4().to_string(),
        };

        tracing::error!(
            error = ?self,
            error_code = error_code,
            "Request failed"
        );

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_errors_map_to_bad_request() {
        let err = FeeLensError::InvalidAddress("0x12".to_string());
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);

        let err = FeeLensError::InvalidAmount("abc".to_string());
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn upstream_errors_map_to_gateway_statuses() {
        assert_eq!(
            FeeLensError::NetworkUnavailable("timeout".into()).into_response().status(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            FeeLensError::InsufficientFeeData.into_response().status(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            FeeLensError::EstimationFailed("execution reverted".into())
                .into_response()
                .status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }

    #[test]
    fn transport_failures_are_not_estimation_failures() {
        let err = ProviderError::CustomError("connection refused".to_string());
        assert!(matches!(
            FeeLensError::from_simulation(err),
            FeeLensError::NetworkUnavailable(_)
        ));
    }
}
