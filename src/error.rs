use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use fitso_diet::DietError;
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Diet plan not found")]
    DietNotFound,

    #[error("Calendar error: {0}")]
    Calendar(#[from] DietError),

    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::Validation(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Validation(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg.clone()),
            AppError::Calendar(err) => (StatusCode::UNPROCESSABLE_ENTITY, err.to_string()),
            AppError::DietNotFound => (
                StatusCode::NOT_FOUND,
                "The requested diet plan could not be found.".to_string(),
            ),
            AppError::Internal(err) => {
                tracing::error!("Internal error: {:?}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An unexpected error occurred. Please try again later.".to_string(),
                )
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
