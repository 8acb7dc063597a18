//! Toast - one displayed notification with its auto-dismiss timer
//!
//! The timer is a spawned tokio task owned by the toast. It is aborted on
//! manual close, on drop, and re-armed when the close callback is replaced.
//! Dismissal (timer or manual) reaches the callback at most once.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use meapi_domain::{Notification, NotificationId};
use tokio::task::JoinHandle;
use tracing::trace;

/// How long a toast stays up unless closed first
pub const AUTO_DISMISS_AFTER: Duration = Duration::from_secs(3);

/// Invoked with the toast's id when it is dismissed
pub type DismissCallback = Arc<dyn Fn(NotificationId) + Send + Sync>;

pub struct Toast {
    notification: Notification,
    on_close: DismissCallback,
    fired: Arc<AtomicBool>,
    timer: Option<JoinHandle<()>>,
}

impl Toast {
    /// Display `notification` and arm its timer
    ///
    /// Must be called from within a tokio runtime.
    pub fn show(notification: Notification, on_close: DismissCallback) -> Self {
        let mut toast = Self {
            notification,
            on_close,
            fired: Arc::new(AtomicBool::new(false)),
            timer: None,
        };
        toast.arm();
        toast
    }

    /// Replace the close callback; a different callback restarts the timer
    pub fn set_on_close(&mut self, on_close: DismissCallback) {
        if Arc::ptr_eq(&self.on_close, &on_close) {
            return;
        }
        self.on_close = on_close;
        if !self.is_dismissed() {
            self.arm();
        }
    }

    /// Manual close; same path as the timer
    pub fn close(&mut self) {
        self.disarm();
        dismiss(&self.fired, &self.on_close, self.notification.id());
    }

    pub fn notification(&self) -> &Notification {
        &self.notification
    }

    pub fn is_dismissed(&self) -> bool {
        self.fired.load(Ordering::SeqCst)
    }

    fn arm(&mut self) {
        self.disarm();
        let fired = Arc::clone(&self.fired);
        let on_close = Arc::clone(&self.on_close);
        let id = self.notification.id();
        self.timer = Some(tokio::spawn(async move {
            tokio::time::sleep(AUTO_DISMISS_AFTER).await;
            dismiss(&fired, &on_close, id);
        }));
    }

    fn disarm(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
    }
}

impl Drop for Toast {
    fn drop(&mut self) {
        self.disarm();
    }
}

impl core::fmt::Debug for Toast {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Toast")
            .field("notification", &self.notification)
            .field("dismissed", &self.is_dismissed())
            .finish()
    }
}

fn dismiss(fired: &AtomicBool, on_close: &DismissCallback, id: NotificationId) {
    if fired.swap(true, Ordering::SeqCst) {
        return;
    }
    trace!(id = id.get(), "dismissing notification");
    on_close(id);
}
