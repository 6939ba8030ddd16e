//! Notification surface port

use crate::domain::Notification;

/// User-facing notification surface (toast, console line, ...)
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}
