//! Unified application error type.
//! All modules (api, core, cli, config, utils) return AppError so that every
//! failure ends up on the same user-facing reporting path.

use std::fmt;
use std::io;
use thiserror::Error;

/// Device capability guarded by a permission prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    Camera,
    Location,
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Capability::Camera => write!(f, "camera"),
            Capability::Location => write!(f, "location"),
        }
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // Local validation
    // ---------------------------
    #[error("Fill in all required fields: {}", .0.join(", "))]
    Validation(Vec<&'static str>),

    #[error("Invalid inspection status: {0}")]
    InvalidStatus(String),

    #[error("Invalid coordinates: {0}")]
    InvalidCoordinates(String),

    // ---------------------------
    // Device
    // ---------------------------
    #[error("Permission denied to access the {0}!")]
    PermissionDenied(Capability),

    #[error("Current location is not available")]
    LocationUnavailable,

    // ---------------------------
    // Backend
    // ---------------------------
    #[error("Could not connect to the backend: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("{}", server_message(.status, .message))]
    Server { status: u16, message: Option<String> },

    #[error("Unexpected backend response: {0}")]
    Decode(#[from] serde_json::Error),

    // ---------------------------
    // IO / config
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

impl AppError {
    /// True for errors detected locally, before any request is issued.
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            AppError::Validation(_)
                | AppError::InvalidStatus(_)
                | AppError::InvalidCoordinates(_)
                | AppError::PermissionDenied(_)
                | AppError::LocationUnavailable
        )
    }
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        AppError::Transport(Box::new(e))
    }
}

/// The server's own `error` text is shown verbatim when present.
fn server_message(status: &u16, message: &Option<String>) -> String {
    match message {
        Some(m) => m.clone(),
        None => format!("Backend rejected the request (HTTP {status})"),
    }
}

pub type AppResult<T> = Result<T, AppError>;
