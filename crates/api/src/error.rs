use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use nrl_core::ValidationError;
use nrl_github::LedgerError;

/// Message returned to clients for any persistence failure. The real
/// cause is logged server-side only, so credentials and internal URLs
/// never leak into a response body.
pub const GENERIC_SAVE_ERROR: &str = "failed to save order";

/// Application-level error type for HTTP handlers.
///
/// Implements [`IntoResponse`] to produce the `{"ok": false, "error": ...}`
/// JSON body the landing page expects.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The request body did not parse as a JSON object.
    #[error("invalid JSON")]
    InvalidJson,

    /// A domain validation failure from `nrl-core`.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A failure from the GitHub ledger client.
    #[error(transparent)]
    Ledger(#[from] LedgerError),

    /// The GitHub environment was incomplete at startup.
    #[error("ledger is not configured")]
    LedgerNotConfigured,
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::InvalidJson => (StatusCode::BAD_REQUEST, "invalid JSON".to_string()),

            AppError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),

            AppError::Ledger(err) => {
                tracing::error!(error = %err, "ledger append failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    GENERIC_SAVE_ERROR.to_string(),
                )
            }

            AppError::LedgerNotConfigured => {
                tracing::error!("order received but the GitHub ledger is not configured");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    GENERIC_SAVE_ERROR.to_string(),
                )
            }
        };

        let body = json!({
            "ok": false,
            "error": message,
        });

        (status, axum::Json(body)).into_response()
    }
}
