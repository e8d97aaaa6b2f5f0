use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use skylane_core::{IdentityError, LedgerError};

use crate::token::TokenError;

#[derive(Debug)]
pub enum AppError {
    AuthenticationError(String),
    AuthorizationError(String),
    ValidationError(String),
    NotFoundError(String),
    ConflictError(String),
    InternalServerError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::AuthenticationError(msg) => (StatusCode::UNAUTHORIZED, msg),
            AppError::AuthorizationError(msg) => (StatusCode::FORBIDDEN, msg),
            AppError::ValidationError(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::NotFoundError(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::ConflictError(msg) => (StatusCode::CONFLICT, msg),
            AppError::InternalServerError(msg) => {
                tracing::error!("Internal Server Error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error".to_string(),
                )
            }
        };

        let body = Json(json!({
            "message": message,
        }));

        (status, body).into_response()
    }
}

impl From<IdentityError> for AppError {
    fn from(err: IdentityError) -> Self {
        let msg = err.to_string();
        match err {
            IdentityError::DuplicateEmail => AppError::ConflictError(msg),
            IdentityError::InvalidCredentials => AppError::AuthenticationError(msg),
        }
    }
}

impl From<LedgerError> for AppError {
    fn from(err: LedgerError) -> Self {
        let msg = err.to_string();
        match err {
            LedgerError::FlightNotFound(_) => AppError::NotFoundError(msg),
            LedgerError::InsufficientSeats { .. } => AppError::ValidationError(msg),
            LedgerError::BookingNotFound(_) => AppError::NotFoundError(msg),
        }
    }
}

impl From<TokenError> for AppError {
    fn from(err: TokenError) -> Self {
        let msg = err.to_string();
        match err {
            TokenError::Missing => AppError::AuthenticationError(msg),
            TokenError::Invalid => AppError::AuthorizationError(msg),
        }
    }
}
