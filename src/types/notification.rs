//! Notification types

use serde::Serialize;

/// Flat parameter bag handed to the email template. Every value is pre-formatted text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateParams {
    pub email: String,
    pub current_pool: String,
    pub current_apy: String,
    pub best_pool: String,
    pub best_apy: String,
    pub yield_difference: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// Nothing was sent: no recipient or no comparison.
    Skipped,
    Sent { recipient: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum NotifyState {
    Idle,
    Sending,
    Sent,
    Error,
}
