//! Defines the app level error type and its conversion to plain-text responses.
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The body of a bulk insert was valid JSON but not an array.
    #[error("Input must be an array of transactions")]
    NotAnArray,

    /// The body of a bulk insert was an empty array.
    #[error("Input must contain at least one transaction")]
    EmptyBatch,

    /// A transaction was missing one of `type`, `category`, `amount` or `date`,
    /// or one of them was empty.
    ///
    /// An amount of zero counts as missing.
    #[error("All fields are required")]
    MissingFields,

    /// The request body could not be parsed as JSON, or a field had the wrong
    /// JSON type (e.g., a number where a string was expected).
    #[error("Could not parse the request body: {0}")]
    MalformedBody(String),

    /// The store failed to run a query or statement.
    ///
    /// The message is passed through to the client unchanged.
    #[error("{0}")]
    StoreFailure(String),

    /// Could not acquire the database lock
    #[error("could not acquire the database lock")]
    DatabaseLockError,
}

impl Error {
    /// The HTTP status code a client should see for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::NotAnArray
            | Error::EmptyBatch
            | Error::MissingFields
            | Error::MalformedBody(_) => StatusCode::BAD_REQUEST,
            Error::StoreFailure(_) | Error::DatabaseLockError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<rusqlite::Error> for Error {
    fn from(error: rusqlite::Error) -> Self {
        tracing::error!("an unhandled SQL error occurred: {}", error);
        Error::StoreFailure(error.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Error::MalformedBody(error.to_string())
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        (self.status_code(), self.to_string()).into_response()
    }
}
