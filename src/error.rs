use axum::{
    response::{IntoResponse, Response},
    Json,
    http::StatusCode,
};
use serde::Serialize;

#[derive(Serialize)]
pub struct ErrorResponse {
    error: String,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Error al consultar OpenAI: {0}")]
    ModelError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Search and extraction problems degrade silently upstream; anything
        // that reaches this point is a server-side failure.
        let status = StatusCode::INTERNAL_SERVER_ERROR;

        let body = Json(ErrorResponse {
            error: self.to_string(),
        });

        (status, body).into_response()
    }
}

impl From<std::env::VarError> for AppError {
    fn from(err: std::env::VarError) -> Self {
        AppError::ConfigError(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_error_maps_to_server_error() {
        let response = AppError::ModelError("rate limited".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn model_error_embeds_provider_message() {
        let err = AppError::ModelError("rate limited".to_string());
        assert_eq!(err.to_string(), "Error al consultar OpenAI: rate limited");
    }
}
