//! Chat-delivery port.

use async_trait::async_trait;
use tracing::info;

use crate::error::NotifyError;

/// Delivers a plain-text message to the user's chat.
///
/// The pipeline hands over a finished message string and gets back success
/// or failure; delivery failure is logged by the caller and never aborts a
/// cycle.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send(&self, message: &str) -> Result<(), NotifyError>;
}

/// A no-op notifier for tests or when notifications are disabled.
pub struct NullNotifier;

#[async_trait]
impl Notifier for NullNotifier {
    async fn send(&self, _message: &str) -> Result<(), NotifyError> {
        Ok(())
    }
}

/// Logs messages via tracing instead of delivering them.
pub struct LogNotifier;

#[async_trait]
impl Notifier for LogNotifier {
    async fn send(&self, message: &str) -> Result<(), NotifyError> {
        info!(message, "Notification");
        Ok(())
    }
}
