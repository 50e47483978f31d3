//! User-facing cart notifications.
//!
//! The cart manager emits one event per mutation; sinks render them however
//! the host UI wants (toasts in the web view, log lines here). Events are
//! fire-and-forget: the manager never reads anything back.

/// What happened to the cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Added,
    Updated,
    Removed,
    Cleared,
}

impl NotificationKind {
    /// Short title for the event, matching the storefront toast copy.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Added => "Added to Quote",
            Self::Updated => "Quote updated",
            Self::Removed => "Item removed",
            Self::Cleared => "Cart cleared",
        }
    }
}

impl std::fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.title())
    }
}

/// Receives human-readable cart events. One-way; return values are ignored.
pub trait NotificationSink: Send + Sync {
    fn notify(&self, kind: NotificationKind, message: &str);
}

/// Production sink that forwards events to `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl NotificationSink for LogSink {
    fn notify(&self, kind: NotificationKind, message: &str) {
        tracing::info!(event = %kind, "{message}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_titles_match_toast_copy() {
        assert_eq!(NotificationKind::Added.title(), "Added to Quote");
        assert_eq!(NotificationKind::Cleared.to_string(), "Cart cleared");
    }
}
