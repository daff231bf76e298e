//! Error-to-status mapping for the HTTP resource layer.

use crate::todo::{
    domain::TaskDomainError,
    ports::TaskRepositoryError,
    services::TaskServiceError,
};
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// JSON error body sent to clients.
#[derive(Debug, Clone, Serialize)]
struct ErrorBody {
    error: String,
    /// Underlying error text, exposed in development mode only.
    #[serde(skip_serializing_if = "Option::is_none")]
    detail: Option<String>,
}

/// An HTTP error response carrying a status code and JSON body.
#[derive(Debug, Clone)]
pub struct ApiError {
    status: StatusCode,
    message: String,
    detail: Option<String>,
}

impl ApiError {
    /// Creates a 400 response.
    #[must_use]
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
            detail: None,
        }
    }

    /// Creates a 404 response.
    #[must_use]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: message.into(),
            detail: None,
        }
    }

    /// Creates a 500 response with a generic message.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: message.into(),
            detail: None,
        }
    }

    /// Maps a service error to a response, logging it with operation
    /// context.
    ///
    /// Validation failures become 400, missing tasks 404, and anything the
    /// persistence layer surfaces becomes a generic 500 whose underlying
    /// text is attached only when `expose_detail` is set.
    #[must_use]
    pub fn from_service(operation: &str, err: &TaskServiceError, expose_detail: bool) -> Self {
        match err {
            TaskServiceError::Domain(domain) => {
                tracing::warn!(operation, error = %domain, "request rejected");
                Self::bad_request(validation_message(domain))
            }
            TaskServiceError::Repository(TaskRepositoryError::NotFound(id)) => {
                tracing::warn!(operation, %id, "todo not found");
                Self::not_found("Todo not found")
            }
            TaskServiceError::Repository(repository) => {
                tracing::error!(operation, error = %repository, "storage failure");
                let mut response = Self::internal(format!("Failed to {operation}"));
                if expose_detail {
                    response.detail = Some(repository.to_string());
                }
                response
            }
        }
    }

    /// Returns the response status code.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        self.status
    }
}

/// User-facing phrasing for validation failures.
fn validation_message(err: &TaskDomainError) -> String {
    match err {
        TaskDomainError::EmptyTitle => "Title cannot be empty".to_owned(),
        TaskDomainError::EmptyUpdate => "No fields to update".to_owned(),
        TaskDomainError::EmptyIdSet => "Valid array of IDs is required".to_owned(),
        TaskDomainError::InvalidPriority(value) => {
            format!("Invalid priority '{value}', expected low, medium, or high")
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.message,
            detail: self.detail,
        };
        (self.status, Json(body)).into_response()
    }
}
