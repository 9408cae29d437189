//! Retry classification of application errors.

use sea_orm::DbErr;

use super::Error;

/// Strategy for handling errors in a retry context
#[derive(Debug, PartialEq, Eq)]
pub enum ErrorRetryStrategy {
    /// Retry with backoff (transient infrastructure failures)
    Retry,
    /// Failed permanently
    Fail,
}

impl Error {
    /// Determine error retry strategy based upon application Error type
    pub fn to_retry_strategy(&self) -> ErrorRetryStrategy {
        match self {
            Self::ReqwestError(reqwest_error) => {
                if let Some(status) = reqwest_error.status() {
                    match status {
                        // Upstream is temporarily unavailable, back off and retry
                        s if s.is_server_error() => ErrorRetryStrategy::Retry,
                        // Invalid request, won't resolve with retry
                        _ => ErrorRetryStrategy::Fail,
                    }
                } else {
                    // Network error or connection issue
                    ErrorRetryStrategy::Retry
                }
            }

            Self::DbErr(db_err) => match db_err {
                // Connection acquisition and connection errors are transient
                DbErr::ConnectionAcquire(_) => ErrorRetryStrategy::Retry,
                DbErr::Conn(_) => ErrorRetryStrategy::Retry,

                // Query, type conversion, and record errors indicate bugs or data issues
                _ => ErrorRetryStrategy::Fail,
            },

            Self::ConfigError(_) => ErrorRetryStrategy::Fail,

            // Inventory errors are already the outcome of the sync fallback policy
            Self::InventoryError(_) => ErrorRetryStrategy::Fail,

            Self::ParseError(_) => ErrorRetryStrategy::Fail,
            Self::InternalError(_) => ErrorRetryStrategy::Fail,
            Self::SerdeJsonError(_) => ErrorRetryStrategy::Fail,
        }
    }
}
