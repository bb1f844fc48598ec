// src/errors.rs
// DOCUMENTATION: Custom error types and HTTP responses
// PURPOSE: Centralized error handling for entire application

use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use serde::Serialize;
use serde_json::json;
use thiserror::Error;

/// A single field-level validation failure.
/// Fields are reported in API notation (camelCase with dotted paths such as
/// `priceRange.min` or `images.0.url`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Application-specific error types
/// DOCUMENTATION: Comprehensive error enum for all possible failures
/// Each variant maps to appropriate HTTP status code and error response
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The requested record id does not resolve to any document.
    #[error("{0}")]
    NotFound(String),

    /// A hotel references a destination that does not exist. Kept separate
    /// from NotFound so the referential failure is distinguishable from a
    /// plain field-format problem.
    #[error("Referenced destination does not exist")]
    DestinationNotFound,

    /// Creating a record would duplicate an existing one.
    #[error("{0}")]
    Conflict(String),

    /// One or more field constraints were violated. All violations are
    /// collected and reported together, never just the first.
    #[error("Validation failed")]
    Validation(Vec<FieldViolation>),

    /// A query parameter could not be interpreted, for example a filter
    /// value that is not a valid document id.
    #[error("{0}")]
    InvalidQuery(String),

    /// The document store itself failed.
    #[error("Database error")]
    Database(String),
}

impl CatalogError {
    /// Shorthand for a single-field validation failure.
    #[allow(dead_code)]
    pub fn violation(field: impl Into<String>, message: impl Into<String>) -> Self {
        CatalogError::Validation(vec![FieldViolation::new(field, message)])
    }
}

/// Convert CatalogError to HTTP response
/// DOCUMENTATION: Maps error types to HTTP status codes and the
/// `{success: false, error, message?, details?}` response envelope
impl ResponseError for CatalogError {
    fn error_response(&self) -> HttpResponse {
        let mut body = json!({
            "success": false,
            "error": self.to_string(),
        });

        match self {
            CatalogError::Validation(violations) => {
                body["details"] = json!(violations);
            }
            CatalogError::Database(detail) => {
                body["message"] = json!(detail);
            }
            _ => {}
        }

        HttpResponse::build(self.status_code()).json(body)
    }

    fn status_code(&self) -> StatusCode {
        match self {
            CatalogError::NotFound(_) => StatusCode::NOT_FOUND,
            CatalogError::DestinationNotFound => StatusCode::NOT_FOUND,
            CatalogError::Conflict(_) => StatusCode::CONFLICT,
            CatalogError::Validation(_) => StatusCode::BAD_REQUEST,
            CatalogError::InvalidQuery(_) => StatusCode::BAD_REQUEST,
            CatalogError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            CatalogError::NotFound("Hotel not found".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            CatalogError::DestinationNotFound.status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            CatalogError::Conflict("duplicate".into()).status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            CatalogError::Validation(vec![]).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            CatalogError::InvalidQuery("bad id".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            CatalogError::Database("connection lost".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_display_messages() {
        let err = CatalogError::NotFound("Destination not found".into());
        assert_eq!(err.to_string(), "Destination not found");

        let err = CatalogError::DestinationNotFound;
        assert_eq!(err.to_string(), "Referenced destination does not exist");

        let err = CatalogError::violation("name", "required");
        assert_eq!(err.to_string(), "Validation failed");
    }
}
