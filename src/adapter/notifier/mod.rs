//! Notification adapters.
//!
//! Implements the `port::Notifier` trait for chat-delivery backends.

mod telegram;

pub use telegram::{TelegramConfig, TelegramNotifier};
