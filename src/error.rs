use actix_web::error::ResponseError;
use actix_web::http::{header::ContentType, StatusCode};
use actix_web::{Error as ActixError, HttpResponse};
use rust_i18n::t;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::locales::LocaleError;
use crate::service::ai::GenerationError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Locale error: {0}")]
    Locale(#[from] LocaleError),
    #[error("Generation error: {0}")]
    Generation(#[from] GenerationError),
    #[error("Validation error: {0}")]
    Validation(ValidationDetails),
    #[error("Not Found")]
    NotFound,
    #[error("Network error: {0}")]
    Network(String),
    #[error("Timeout error: {0}")]
    Timeout(String),
    #[error("Generic error: {0}")]
    Generic(String),
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ValidationDetails {
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for ValidationDetails {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Field: {}, Message: {}", self.field, self.message)
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ErrorResponse {
    pub code: u32,
    pub status: String,
    pub message: String,
    pub data: Option<serde_json::Value>,
}

impl AppError {
    fn status_code(&self) -> (u32, String) {
        match self {
            AppError::Io(_) => (500, t!("errors.http.internal_server_error").to_string()),
            AppError::Anyhow(_) => (500, t!("errors.http.internal_server_error").to_string()),
            AppError::Config(_) => (500, t!("errors.http.internal_server_error").to_string()),
            AppError::Locale(_) => (500, t!("errors.http.internal_server_error").to_string()),
            AppError::Generation(_) => (503, t!("errors.http.service_unavailable").to_string()),
            AppError::Validation(_) => (400, t!("errors.http.bad_request").to_string()),
            AppError::NotFound => (404, t!("errors.http.not_found").to_string()),
            AppError::Network(_) => (503, t!("errors.http.service_unavailable").to_string()),
            AppError::Timeout(_) => (504, t!("errors.http.gateway_timeout").to_string()),
            AppError::Generic(_) => (500, t!("errors.http.internal_server_error").to_string()),
        }
    }
}

impl From<ActixError> for AppError {
    fn from(err: ActixError) -> Self {
        let status = err.as_response_error().status_code();
        let error_str = err.to_string();
        let context = format!("Status: {}, Error: {}", status, error_str);

        log::error!("{}", t!("logs.error_occurred", context = context));

        match status {
            StatusCode::NOT_FOUND => AppError::NotFound,
            StatusCode::BAD_REQUEST => AppError::Validation(ValidationDetails {
                field: "request".to_string(),
                message: error_str,
            }),
            StatusCode::GATEWAY_TIMEOUT => AppError::Timeout(error_str),
            _ => {
                log::debug!("Unmatched error occurred. Status: {}, Error: {}", status, error_str);
                AppError::Generic(format!("Unexpected error occurred: {} (context: {})", error_str, context))
            }
        }
    }
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        let response = ErrorResponse::from(self);
        let status_code = match StatusCode::from_u16(response.code as u16) {
            Ok(code) => code,
            Err(_) => {
                log::error!("{}", t!("logs.invalid_status_code", code = response.code));
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        HttpResponse::build(status_code).content_type(ContentType::json()).json(response)
    }
}

impl From<&AppError> for ErrorResponse {
    fn from(error: &AppError) -> Self {
        let (code, status) = error.status_code();

        let mut response = ErrorResponse {
            code,
            status: status.to_string(),
            message: error.to_string(),
            data: None,
        };

        if let AppError::Validation(details) = error {
            response.data = serde_json::to_value(details)
                .map_err(|err| {
                    log::error!("{}", t!("logs.serialization_failed", msg = err.to_string()));
                })
                .ok();
        }

        log::debug!("Final error response: {:?}", response);
        response
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
