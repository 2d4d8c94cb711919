use axum::Json;
use http::StatusCode;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Access denied: path '{0}' is outside repository")]
    AccessDenied(String),
    #[error("{0}")]
    NotFound(String),
    #[error("Not a file: {0}")]
    NotAFile(String),
    #[error("Invalid {kind} '{given}'. Valid {kind}s: {}", valid.join(", "))]
    InvalidAlias {
        kind: &'static str,
        given: String,
        valid: Vec<&'static str>,
    },
    #[error("invalid params: {0}")]
    InvalidParams(String),
    #[error("request too large")]
    RequestTooLarge,
    #[error("internal error: {0}")]
    Internal(String),
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: &'static str,
    pub message: String,
}

impl AppError {
    pub fn code(&self) -> &'static str {
        match self {
            AppError::AccessDenied(_) => "AccessDenied",
            AppError::NotFound(_) => "NotFound",
            AppError::NotAFile(_) => "NotAFile",
            AppError::InvalidAlias { .. } => "InvalidAlias",
            AppError::InvalidParams(_) => "InvalidParams",
            AppError::RequestTooLarge => "RequestTooLarge",
            AppError::Internal(_) => "Internal",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::AccessDenied(_) => StatusCode::FORBIDDEN,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::NotAFile(_) | AppError::InvalidAlias { .. } | AppError::InvalidParams(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::RequestTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn body(&self) -> ErrorBody {
        ErrorBody { code: self.code(), message: self.to_string() }
    }
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::Internal(e.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;

pub fn into_response(err: AppError) -> (StatusCode, Json<ErrorBody>) {
    (err.status(), Json(err.body()))
}
