//! Error types for the in-call screen core

use thiserror::Error;

use crate::call::CallId;

/// Result type for in-call screen operations
pub type InCallResult<T> = Result<T, InCallError>;

/// Errors that can occur in the in-call screen core
#[derive(Debug, Error)]
pub enum InCallError {
    /// The telephony layer reported a supplementary-service code outside the known range
    #[error("Invalid supplementary service code: {code}")]
    InvalidSuppService { code: u32 },

    /// Call not found in the call registry
    #[error("Call not found: {call_id}")]
    CallNotFound { call_id: CallId },

    /// Modify-call option index out of range
    #[error("Invalid modify call option index: {index}")]
    InvalidModifyOption { index: usize },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Invalid state error
    #[error("Invalid state: {message}")]
    InvalidState { message: String },

    /// Failed to read a configuration file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to parse a configuration document
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl InCallError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create an invalid state error
    pub fn invalid_state(message: impl Into<String>) -> Self {
        Self::InvalidState {
            message: message.into(),
        }
    }

    /// Whether this error is a caller contract violation rather than a runtime condition
    pub fn is_contract_violation(&self) -> bool {
        matches!(
            self,
            Self::InvalidSuppService { .. } | Self::InvalidModifyOption { .. }
        )
    }
}
