//! Configuration errors.

use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::server::error::InternalServerError;

/// Errors raised while reading the configuration from the environment
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required variable is not set
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),
    /// A variable is set but its value could not be used
    #[error("Invalid value for environment variable {var}: {reason}")]
    InvalidEnvValue {
        /// Name of the variable
        var: String,
        /// Why the value was rejected
        reason: String,
    },
}

impl ConfigError {
    /// Builds an [`ConfigError::InvalidEnvValue`] for the provided variable name
    pub fn invalid(var: &str, reason: impl ToString) -> Self {
        Self::InvalidEnvValue {
            var: var.to_string(),
            reason: reason.to_string(),
        }
    }
}

impl IntoResponse for ConfigError {
    fn into_response(self) -> Response {
        InternalServerError(self).into_response()
    }
}
