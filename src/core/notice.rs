//! Blocking messages shown to the user after an action.

use crate::errors::AppError;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub body: Option<String>,
}

impl Notice {
    pub fn info(title: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            title: title.into(),
            body: None,
        }
    }

    pub fn success(title: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            title: title.into(),
            body: None,
        }
    }

    pub fn error(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            title: title.into(),
            body: Some(body.into()),
        }
    }

    /// Map a failed action to what the user is told.
    ///
    /// `action` completes the sentence "Failed to ...", e.g. "save work site".
    pub fn from_error(action: &str, err: &AppError) -> Self {
        match err {
            AppError::Validation(_)
            | AppError::InvalidStatus(_)
            | AppError::InvalidCoordinates(_) => Notice::info(err.to_string()),
            AppError::PermissionDenied(_) | AppError::LocationUnavailable => Self {
                kind: NoticeKind::Error,
                title: err.to_string(),
                body: None,
            },
            AppError::Transport(_) => {
                Notice::error("Network error", "Could not connect to the backend.")
            }
            AppError::Server { message, .. } => Notice::error(
                format!("Failed to {action}"),
                message.clone().unwrap_or_else(|| "Unknown error".to_string()),
            ),
            other => Notice::error(format!("Failed to {action}"), other.to_string()),
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.body {
            Some(body) => write!(f, "{}: {}", self.title, body),
            None => f.write_str(&self.title),
        }
    }
}
