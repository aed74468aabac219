//! Toast notification queue.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every user-facing success and failure message in the app flows
//! through this queue; the tray component renders it and schedules
//! auto-dismissal. Pages never render API errors inline.

#[cfg(test)]
#[path = "notify_test.rs"]
mod notify_test;

/// Visual flavor of a toast.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

/// A single queued notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: String,
    pub kind: ToastKind,
    pub message: String,
}

/// Visible toasts, oldest first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NotifyState {
    pub toasts: Vec<Toast>,
}

impl NotifyState {
    /// Queue a toast and return its id for later dismissal.
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> String {
        let id = uuid::Uuid::new_v4().to_string();
        self.toasts.push(Toast {
            id: id.clone(),
            kind,
            message: message.into(),
        });
        id
    }

    /// Remove a toast by id. Unknown ids are ignored, since a manual
    /// dismiss can race the auto-dismiss timer.
    pub fn dismiss(&mut self, id: &str) {
        self.toasts.retain(|toast| toast.id != id);
    }
}
