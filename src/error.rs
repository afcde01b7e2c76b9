//! Application error type and its HTTP mapping.
//!
//! Every failure leaving a handler is an [`AppError`]. Responses always carry a
//! single `detail` field: a plain message for 403/404/500, and a list of field
//! errors for 422.

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};
use thiserror::Error;
use validator::ValidationErrors;

/// Message returned for every rejected API key.
pub const INVALID_CREDENTIALS: &str = "Could not validate credentials";

#[derive(Serialize)]
struct ErrorBody {
    detail: Value,
}

#[derive(Debug, Error)]
pub enum AppError {
    /// Request body or path failed validation (422).
    #[error("{message}")]
    Validation { message: String, details: Value },

    /// Missing or incorrect API key (403).
    #[error("{message}")]
    Forbidden { message: String },

    /// Referenced book does not exist (404).
    #[error("{message}")]
    NotFound { message: String },

    /// Storage or other unexpected failure (500).
    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn validation(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden {
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// HTTP status this error maps to.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Forbidden { .. } => StatusCode::FORBIDDEN,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        let detail = match self {
            AppError::Validation { details, .. } => details,
            AppError::Forbidden { message } | AppError::NotFound { message } => {
                Value::String(message)
            }
            AppError::Internal { message, details } => {
                tracing::error!(%message, %details, "Request failed with internal error");
                Value::String("Internal Server Error".to_string())
            }
        };

        (status, Json(ErrorBody { detail })).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if let Some(db) = e.as_database_error() {
            return AppError::internal(
                "Database error",
                json!({ "code": db.code(), "constraint": db.constraint(), "error": db.message() }),
            );
        }

        AppError::internal("Database error", json!({ "error": e.to_string() }))
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
        fields.sort_by(|a, b| a.0.cmp(&b.0));

        let details: Vec<Value> = fields
            .into_iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |err| {
                    let msg = err
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("Invalid value for {field}"));
                    json!({
                        "loc": ["body", field],
                        "msg": msg,
                        "type": err.code,
                    })
                })
            })
            .collect();

        AppError::validation("Request validation failed", Value::Array(details))
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        let kind = match &rejection {
            JsonRejection::JsonSyntaxError(_) => "json_invalid",
            JsonRejection::MissingJsonContentType(_) => "content_type",
            _ => "body_invalid",
        };

        AppError::validation(
            "Invalid request body",
            json!([{ "loc": ["body"], "msg": rejection.body_text(), "type": kind }]),
        )
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::validation(
            "Invalid path parameter",
            json!([{ "loc": ["path", "book_id"], "msg": rejection.body_text(), "type": "int_parsing" }]),
        )
    }
}
