//! An expense tracker is a small web service for personal bookkeeping.
//!
//! This library provides a JSON REST API for recording income and expense
//! transactions in a SQLite database and for summarising them.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_server::Handle;
use serde_json::json;
use tokio::signal;

mod amount;
mod app_state;
mod database_id;
mod db;
mod endpoints;
mod logging;
mod not_found;
mod routing;
mod summary;
mod transaction;

#[cfg(test)]
mod test_utils;

pub use amount::Amount;
pub use app_state::AppState;
pub use database_id::{DatabaseId, TransactionId};
pub use db::{Database, ExecuteOutcome, initialize as initialize_db};
pub use logging::{LOG_BODY_LENGTH_LIMIT, logging_middleware};
pub use routing::build_router;
pub use summary::{Predicate, Summary, SummaryFilter, SummaryQuery, get_summary};
pub use transaction::{NewTransaction, Transaction, TransactionPayload};

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}

/// The errors that may occur in the application.
///
/// Every variant is terminal for the request that raised it and is sent to
/// the client as `{"error": <message>}`.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The request body was malformed or a required field was missing.
    ///
    /// The message is sent to the client verbatim.
    #[error("{0}")]
    Validation(String),

    /// No transaction matched the requested ID.
    #[error("Transaction not found")]
    NotFound,

    /// The database failed to run a statement.
    ///
    /// The message from the underlying storage error is passed through to the
    /// client.
    #[error("{0}")]
    Storage(String),
}

impl Error {
    /// The error for a request body that omits a required transaction field.
    pub(crate) fn missing_fields() -> Self {
        Error::Validation("Missing required fields".to_owned())
    }

    fn status_code(&self) -> StatusCode {
        match self {
            Error::Validation(_) => StatusCode::BAD_REQUEST,
            Error::NotFound => StatusCode::NOT_FOUND,
            Error::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        tracing::error!("an unhandled SQL error occurred: {}", value);
        Error::Storage(value.to_string())
    }
}

impl From<JsonRejection> for Error {
    fn from(value: JsonRejection) -> Self {
        Error::Validation(value.body_text())
    }
}

// An ID that does not parse as an integer cannot match any row.
impl From<PathRejection> for Error {
    fn from(value: PathRejection) -> Self {
        tracing::debug!("Could not parse transaction ID: {}", value.body_text());
        Error::NotFound
    }
}

impl From<QueryRejection> for Error {
    fn from(value: QueryRejection) -> Self {
        Error::Validation(value.body_text())
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        (self.status_code(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod error_tests {
    use axum::{http::StatusCode, response::IntoResponse};

    use crate::Error;

    #[test]
    fn maps_errors_to_status_codes() {
        assert_eq!(
            Error::missing_fields().into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            Error::NotFound.into_response().status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            Error::Storage("disk I/O error".to_owned())
                .into_response()
                .status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn storage_error_keeps_sqlite_message() {
        let error: Error = rusqlite::Error::QueryReturnedNoRows.into();

        assert_eq!(
            error,
            Error::Storage(rusqlite::Error::QueryReturnedNoRows.to_string())
        );
    }

    #[test]
    fn missing_fields_message() {
        assert_eq!(Error::missing_fields().to_string(), "Missing required fields");
    }
}
