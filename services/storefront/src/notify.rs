//! services/storefront/src/notify.rs
//!
//! A notifier implementation that renders toasts into the structured log.
//! Used by the demo binary and anywhere no real presentation layer is
//! attached; tests substitute their own recording implementation.

use storefront_core::domain::{Notification, Severity};
use storefront_core::ports::Notifier;
use tracing::{error, info, warn};

#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notification: Notification) {
        match notification.severity {
            Severity::Success | Severity::Info => {
                info!(id = %notification.id, "{}", notification.message);
            }
            Severity::Warning => {
                warn!(id = %notification.id, "{}", notification.message);
            }
            Severity::Error => {
                error!(id = %notification.id, "{}", notification.message);
            }
        }
    }
}
