//! # Notifications
//!
//! Fire-and-forget user feedback channel.
//!
//! ## Why a Channel
//! ```text
//! ┌────────────────────────────────────────────────────────────────────────┐
//! │                     Notification Flow                                  │
//! │                                                                        │
//! │  Action (foreground)            Background write task                  │
//! │  ────────────────────           ─────────────────────                  │
//! │  apply change locally           store.transactions().insert(...)       │
//! │  notifier.success("...")                │                              │
//! │                                         ▼ on error                    │
//! │                                 notifier.error("...")                  │
//! │                                                                        │
//! │  Both ends push into one unbounded channel; the UI shell drains the    │
//! │  receiver and renders toasts. Sending never blocks, so a slow or       │
//! │  absent consumer cannot stall an action.                               │
//! └────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use tokio::sync::mpsc;
use tracing::warn;

/// Severity of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeLevel {
    Success,
    Error,
}

/// One user-facing notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub level: NoticeLevel,
    pub message: String,
}

/// Cloneable sender half for notifications.
#[derive(Debug, Clone)]
pub struct Notifier {
    tx: mpsc::UnboundedSender<Notification>,
}

impl Notifier {
    /// Creates a notifier and the receiver the UI shell drains.
    pub fn channel() -> (Notifier, mpsc::UnboundedReceiver<Notification>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Notifier { tx }, rx)
    }

    /// Sends a success notification.
    pub fn success(&self, message: impl Into<String>) {
        self.send(NoticeLevel::Success, message.into());
    }

    /// Sends an error notification.
    pub fn error(&self, message: impl Into<String>) {
        self.send(NoticeLevel::Error, message.into());
    }

    fn send(&self, level: NoticeLevel, message: String) {
        // A dropped receiver means no UI shell is attached; the message
        // still lands in the log
        if self
            .tx
            .send(Notification {
                level,
                message: message.clone(),
            })
            .is_err()
        {
            warn!(%message, "Notification receiver dropped");
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_notifications_arrive_in_order() {
        let (notifier, mut rx) = Notifier::channel();

        notifier.success("Cobro registrado");
        notifier.error("Error al guardar el cobro");

        let first = rx.recv().await.unwrap();
        assert_eq!(first.level, NoticeLevel::Success);
        assert_eq!(first.message, "Cobro registrado");

        let second = rx.recv().await.unwrap();
        assert_eq!(second.level, NoticeLevel::Error);
    }

    #[test]
    fn test_send_without_receiver_does_not_panic() {
        let (notifier, rx) = Notifier::channel();
        drop(rx);
        notifier.success("nadie escucha");
    }
}
