//! Errors of the inventory source and the inventory sync entry point.

use std::fmt;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Failure category of a request made to the external inventory source
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SourceErrorKind {
    /// The source throttled the walk (429), retryable later but not within the same sync
    RateLimited,
    /// The source refused the request (401/403), usually a private inventory
    AccessDenied,
    /// The source rejected the request as malformed (any other 4xx)
    BadRequest,
    /// Network, timeout, 5xx, or undecodable response
    Transient,
}

impl SourceErrorKind {
    /// Classifies a non-success HTTP status returned by the inventory source
    pub fn from_status(status: StatusCode) -> Self {
        match status {
            StatusCode::TOO_MANY_REQUESTS => Self::RateLimited,
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Self::AccessDenied,
            s if s.is_client_error() => Self::BadRequest,
            _ => Self::Transient,
        }
    }

    /// Whether a later attempt may succeed without any change on the account's side
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::RateLimited | Self::Transient)
    }
}

impl fmt::Display for SourceErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::RateLimited => "rate limited",
            Self::AccessDenied => "access denied",
            Self::BadRequest => "bad request",
            Self::Transient => "transient failure",
        };

        f.write_str(name)
    }
}

/// Classified failure of a single page fetch from the external inventory source.
///
/// Produced by the page fetcher, propagated unchanged by the assembler, and consumed by the
/// sync coordinator which turns it into a snapshot fallback or [`InventoryError::NoDataAvailable`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Inventory source {kind}: {message}")]
pub struct SourceError {
    /// Failure category
    pub kind: SourceErrorKind,
    /// Human readable detail for logs
    pub message: String,
}

impl SourceError {
    /// Creates an error of the given category
    pub fn new(kind: SourceErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Whether the failure category is worth retrying later
    pub fn retryable(&self) -> bool {
        self.kind.is_retryable()
    }
}

/// Errors surfaced by the inventory sync entry point.
///
/// This type is `Clone` so a single in-flight sync result can be handed to every caller that
/// joined it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InventoryError {
    /// The provided account identifier was empty or whitespace
    #[error("Account identifier is required")]
    InvalidAccountId,
    /// The live fetch failed and no usable snapshot exists for the account
    #[error("No inventory data available for account {account_id} ({kind}): {message}")]
    NoDataAvailable {
        /// Account whose sync failed
        account_id: String,
        /// Category of the source failure
        kind: SourceErrorKind,
        /// Detail of the source failure
        message: String,
    },
}

impl IntoResponse for InventoryError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::InvalidAccountId => (
                StatusCode::BAD_REQUEST,
                "Account identifier is required".to_string(),
            ),
            Self::NoDataAvailable { kind, .. } => {
                tracing::warn!("{}", self);

                match kind {
                    SourceErrorKind::RateLimited => (
                        StatusCode::TOO_MANY_REQUESTS,
                        "Steam is rate limiting inventory requests, please try again later"
                            .to_string(),
                    ),
                    SourceErrorKind::AccessDenied => (
                        StatusCode::FORBIDDEN,
                        "Inventory is unavailable, make sure the Steam inventory is set to public"
                            .to_string(),
                    ),
                    SourceErrorKind::BadRequest => (
                        StatusCode::BAD_REQUEST,
                        "Inventory is unavailable, make sure the Steam inventory is set to public"
                            .to_string(),
                    ),
                    SourceErrorKind::Transient => (
                        StatusCode::BAD_GATEWAY,
                        "Failed to load inventory from Steam".to_string(),
                    ),
                }
            }
        };

        (status, Json(ErrorDto { error: message })).into_response()
    }
}
