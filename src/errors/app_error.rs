//! Custom error types for Blendable

use thiserror::Error;

/// Shown to the user whenever an email notification cannot be delivered.
pub const NOTIFICATION_FAILED_MESSAGE: &str =
    "Failed to send email notification. Please try again.";

#[derive(Error, Debug)]
pub enum BlendableError {
    #[error("{message}")]
    Notification {
        message: String,
        #[source]
        source: Option<anyhow::Error>,
    },

    #[error("Unknown pool: {id}")]
    UnknownPool {
        id: String,
    },

    #[error("Invalid pool: {pool} - {reason}")]
    InvalidPool {
        pool: String,
        reason: String,
    },

    #[error("Pool catalog is empty")]
    EmptyCatalog,
}

impl BlendableError {
    /// Collapses any send failure into the single user-facing failure.
    pub fn notification_failed(source: anyhow::Error) -> Self {
        BlendableError::Notification {
            message: NOTIFICATION_FAILED_MESSAGE.to_string(),
            source: Some(source),
        }
    }
}

pub type BlendableResult<T> = Result<T, BlendableError>;
