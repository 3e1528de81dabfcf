use actix_web::{HttpResponse, error::ResponseError, http::StatusCode};
use serde::{Deserialize, Serialize};
use std::error::Error as StdError;
use std::fmt;

/// Generic user-facing message for all 5xx responses. The real cause goes
/// into the `details` field and the server log.
const GENERATION_ERROR_MESSAGE: &str = "Erreur lors de la génération de l'explication";

#[derive(Debug)]
pub enum AppError {
    Validation(String),
    Upstream(String),
    Internal(String),
    Configuration(String),
}

#[derive(Serialize, Deserialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Validation(e) => write!(f, "Validation error: {}", e),
            AppError::Upstream(e) => write!(f, "Upstream error: {}", e),
            AppError::Internal(e) => write!(f, "Internal error: {}", e),
            AppError::Configuration(e) => write!(f, "Configuration error: {}", e),
        }
    }
}

impl StdError for AppError {}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        let status_code = self.status_code();

        if status_code.is_server_error() {
            log::error!("Erreur API: {}", self);
        }

        // Validation errors carry their message directly; everything else is
        // collapsed into the generic French message with the cause in details.
        let error_response = match self {
            AppError::Validation(message) => ErrorResponse {
                error: message.clone(),
                details: None,
            },
            AppError::Upstream(details)
            | AppError::Internal(details)
            | AppError::Configuration(details) => ErrorResponse {
                error: GENERATION_ERROR_MESSAGE.to_string(),
                details: Some(details.clone()),
            },
        };

        HttpResponse::build(status_code).json(error_response)
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

// Define AppResult type alias for Result<T, AppError>
pub type AppResult<T> = Result<T, AppError>;
