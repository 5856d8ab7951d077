// src/error.rs

//! Error types for the recipe client

use thiserror::Error;

/// Errors produced by the recipe client library
#[derive(Error, Debug)]
pub enum Error {
    /// The request never produced a response (DNS, connect, TLS, timeout)
    #[error("Request to {url} failed: {reason}")]
    Transport { url: String, reason: String },

    /// The service answered with a non-success status
    #[error("HTTP {status} from {url}")]
    Status { status: u16, url: String },

    /// The response body could not be decoded
    #[error("Failed to decode response from {url}: {reason}")]
    Decode { url: String, reason: String },

    /// No recipe with this id in the current catalog
    #[error("Recipe not found: {0}")]
    NotFound(String),

    /// Operation needs an open form
    #[error("No recipe form is open")]
    ModalClosed,

    /// Form is already open in another mode
    #[error("A {0} form is already open; close it first")]
    ModalBusy(&'static str),

    /// Field edits are rejected in read-only mode
    #[error("Field '{0}' is read-only in view mode")]
    FieldDisabled(&'static str),

    /// Save is only offered in edit and create mode
    #[error("Save is not available in view mode")]
    SaveUnavailable,

    #[error("Unknown field: {0}")]
    UnknownField(String),

    #[error("Invalid recipe kind '{0}' (expected BEBIDA, SALGADA or DOCE)")]
    InvalidKind(String),

    #[error("Invalid API URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// True for failures of a remote call
    pub fn is_remote(&self) -> bool {
        matches!(
            self,
            Error::Transport { .. } | Error::Status { .. } | Error::Decode { .. }
        )
    }
}

/// Result type for recipe client operations
pub type Result<T> = std::result::Result<T, Error>;
