//! Error types for the skinvault server.
//!
//! This module provides the error handling system with specialized error types for each domain
//! (configuration and inventory synchronization) and the external library errors that surface
//! from the database, the HTTP client, and JSON (de)serialization. All errors implement
//! `IntoResponse` for Axum HTTP responses and use `thiserror` for their `Display` and `Error`
//! implementations.

pub mod config;
pub mod inventory;
pub mod retry;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{config::ConfigError, inventory::InventoryError},
};

/// Main error type for the skinvault server.
///
/// Aggregates all domain-specific error types and external library errors into a single
/// unified error type. `#[from]` enables conversion from the underlying error types via `?`.
/// The `IntoResponse` implementation maps errors to HTTP responses for API consumers.
///
/// # Error Categories
/// - Configuration errors (missing/invalid environment variables)
/// - Inventory errors (invalid account identifiers, no data available after a failed sync)
/// - External library errors (database, HTTP client, JSON)
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Inventory synchronization error surfaced to callers.
    #[error(transparent)]
    InventoryError(#[from] InventoryError),
    /// Parse error (failed to parse a value from string or other format).
    #[error("Failed to parse value: {0:?}")]
    ParseError(String),
    /// Internal error indicating a bug in skinvault's code.
    #[error("Internal error, this indicates a bug: {0:?}")]
    InternalError(String),
    /// HTTP client error (connection failures, timeouts, unexpected status codes).
    #[error(transparent)]
    ReqwestError(#[from] reqwest::Error),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// JSON error (snapshot item (de)serialization).
    #[error(transparent)]
    SerdeJsonError(#[from] serde_json::Error),
}

/// Converts application errors into HTTP responses.
///
/// `ConfigError` and `InventoryError` have their own response mappings, every other error is
/// logged and returned as a generic 500 Internal Server Error.
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::InventoryError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" message to the client
/// to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
