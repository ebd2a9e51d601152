//! User-facing notices (toasts).
//!
//! Failures at the network boundary are not retried; they are turned into a
//! `Notice` that the front end shows and forgets.

use serde::{Deserialize, Serialize};

use crate::error::{ApiError, DesignError, Error};

/// Severity of a notice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Success,
    Info,
    Warning,
    Error,
}

impl std::fmt::Display for NoticeLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Success => write!(f, "success"),
            Self::Info => write!(f, "info"),
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// A toast notification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn new(level: NoticeLevel, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level,
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Success, title, message)
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Error, title, message)
    }

    /// Builds the notice shown when an operation fails.
    pub fn from_error(err: &Error) -> Self {
        match err {
            Error::Design(DesignError::Validation { reason }) => {
                Self::new(NoticeLevel::Warning, "Design incomplete", reason.clone())
            }
            Error::Api(ApiError::SaveInFlight) => Self::new(
                NoticeLevel::Info,
                "Saving",
                "Your design is already being saved",
            ),
            Error::Api(_) => Self::error("Save failed", "Failed to save design. Please try again."),
            other => Self::error("Error", other.to_string()),
        }
    }
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}: {}", self.level, self.title, self.message)
    }
}
