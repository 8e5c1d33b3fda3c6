//! Defines the app level error type and its conversion to JSON responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// An empty (or whitespace only) string was used as a category name.
    #[error("category name cannot be empty")]
    EmptyCategoryName,

    /// A negative number was given as the amount allocated to a category.
    #[error("allocated amount cannot be negative, got {0}")]
    NegativeAllocatedAmount(f64),

    /// The request body could not be parsed as JSON for a category.
    #[error("invalid request body: {0}")]
    InvalidRequestBody(String),

    /// The category ID in the request path is not a valid ID.
    #[error("invalid category ID: {0}")]
    InvalidCategoryId(String),

    /// The persistence layer failed to complete an operation.
    ///
    /// Holds the error message from the underlying store, which is passed
    /// through to the client as-is.
    #[error("{0}")]
    StoreFailure(String),
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        tracing::error!("an unhandled SQL error occurred: {}", value);
        Error::StoreFailure(value.to_string())
    }
}

/// The JSON body sent to the client when a request fails.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorMessage {
    /// A human readable description of the error.
    pub message: String,
}

impl Error {
    /// The HTTP status code that the client should receive for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::EmptyCategoryName
            | Error::NegativeAllocatedAmount(_)
            | Error::InvalidRequestBody(_)
            | Error::InvalidCategoryId(_) => StatusCode::BAD_REQUEST,
            Error::StoreFailure(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!("Responding with internal server error: {self}");
        } else {
            tracing::debug!("Rejecting request: {self}");
        }

        (
            status,
            Json(ErrorMessage {
                message: self.to_string(),
            }),
        )
            .into_response()
    }
}
