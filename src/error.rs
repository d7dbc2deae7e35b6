//! Application error type and its HTTP rendering.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

use crate::domain::record::Record;
use crate::domain::validation::FieldErrors;

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Error payload returned by the JSON API.
#[derive(Debug, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The submission was rejected; `fields` names every offending field.
    #[error("{message}")]
    Validation { message: String, fields: FieldErrors },
    #[error("{message}")]
    NotFound { message: String, details: Value },
    #[error("{message}")]
    Conflict { message: String, details: Value },
    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn validation(fields: FieldErrors) -> Self {
        Self::Validation {
            message: "Validation failed".to_string(),
            fields,
        }
    }
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    pub fn conflict(message: impl Into<String>, details: Value) -> Self {
        Self::Conflict {
            message: message.into(),
            details,
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// Not-found error naming the record type and id.
    pub fn record_not_found<R: Record>(id: i64) -> Self {
        Self::not_found(
            format!("{} not found", R::NAME),
            json!({ "record": R::NAME, "id": id }),
        )
    }

    /// Field errors of a rejected submission.
    pub fn fields(&self) -> Option<&FieldErrors> {
        match self {
            AppError::Validation { fields, .. } => Some(fields),
            _ => None,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Conflict { .. } => StatusCode::CONFLICT,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn info(self) -> ErrorInfo {
        let (code, message, details) = match self {
            AppError::Validation { message, fields } => ("validation_error", message, json!(fields)),
            AppError::NotFound { message, details } => ("not_found", message, details),
            AppError::Conflict { message, details } => ("conflict", message, details),
            AppError::Internal { message, details } => ("internal_error", message, details),
        };

        ErrorInfo {
            code,
            message,
            details,
        }
    }
}

impl From<FieldErrors> for AppError {
    fn from(fields: FieldErrors) -> Self {
        AppError::validation(fields)
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if let Some(db) = e.as_database_error()
            && db.is_unique_violation()
        {
            return AppError::conflict(
                "Unique constraint violation",
                json!({ "constraint": db.constraint() }),
            );
        }

        tracing::error!(error = %e, "Database error");
        AppError::internal("Database error", json!({}))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorBody { error: self.info() };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_carries_fields() {
        let mut fields = FieldErrors::new();
        fields.insert("email", "Por favor ingrese un email valido");

        let error = AppError::from(fields.clone());

        assert_eq!(error.status(), StatusCode::BAD_REQUEST);
        assert_eq!(error.fields(), Some(&fields));

        let info = error.info();
        assert_eq!(info.code, "validation_error");
        assert_eq!(
            info.details,
            json!({"email": "Por favor ingrese un email valido"})
        );
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::not_found("missing", json!({})).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::conflict("dup", json!({})).status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            AppError::internal("boom", json!({})).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_record_not_found_names_record() {
        let error = AppError::record_not_found::<crate::domain::entities::Pet>(7);
        assert_eq!(error.to_string(), "pet not found");
        assert_eq!(error.info().details, json!({"record": "pet", "id": 7}));
    }

    #[test]
    fn test_display_uses_message() {
        let error = AppError::not_found("Client not found", json!({"id": 3}));
        assert_eq!(error.to_string(), "Client not found");
        assert!(error.fields().is_none());
    }
}
