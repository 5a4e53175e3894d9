//! Defines the app level error type and its conversion to JSON error responses.
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// The errors that may occur while serving the API.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// A query parameter could not be parsed into the expected type or range.
    ///
    /// The client should check that `month` is an integer between 1 and 12
    /// and that `page` is a positive integer.
    #[error("invalid query parameter: {0}")]
    InvalidParameter(String),

    /// The handle to the sales store could not be acquired.
    #[error("could not acquire the store handle")]
    StoreUnavailable,

    /// One of the sub-fetches of the combined statistics endpoint failed.
    ///
    /// The combined response is all-or-nothing: the first sub-fetch error
    /// aborts the composition and is carried here as the source.
    #[error("the {operation} query failed: {source}")]
    UpstreamFailure {
        /// The sub-operation that failed.
        operation: &'static str,
        /// The error that aborted the composition.
        source: Box<Error>,
    },

    /// An unhandled/unexpected SQL error.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        tracing::error!("an unhandled SQL error occurred: {}", value);
        Error::SqlError(value)
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status_code = match &self {
            Error::InvalidParameter(_) => StatusCode::BAD_REQUEST,
            // The dashboard relies on a client-error status from the combined
            // endpoint to show its error banner.
            Error::UpstreamFailure { .. } => StatusCode::BAD_REQUEST,
            Error::StoreUnavailable | Error::SqlError(_) => {
                tracing::error!("An unexpected error occurred: {}", self);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (status_code, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
