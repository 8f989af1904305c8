//! Transient notifications.

use dioxus::prelude::*;

use crate::client::api::ApiError;

/// Notifications kept on screen at once; older ones are dropped first.
pub const MAX_TOASTS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub title: String,
    pub message: String,
}

#[derive(Debug, Default)]
pub struct ToastQueue {
    next_id: u64,
    toasts: Vec<Toast>,
}

impl ToastQueue {
    pub fn push(&mut self, kind: ToastKind, title: impl Into<String>, message: impl Into<String>) -> u64 {
        self.next_id += 1;
        self.toasts.push(Toast {
            id: self.next_id,
            kind,
            title: title.into(),
            message: message.into(),
        });

        if self.toasts.len() > MAX_TOASTS {
            let overflow = self.toasts.len() - MAX_TOASTS;
            self.toasts.drain(..overflow);
        }

        self.next_id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|toast| toast.id != id);
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }
}

/// Handle to the notification queue provided by [`App`](crate::client::App).
#[derive(Clone, Copy, PartialEq)]
pub struct Toasts(pub Signal<ToastQueue>);

impl Toasts {
    pub fn success(mut self, title: impl Into<String>, message: impl Into<String>) {
        self.0.write().push(ToastKind::Success, title, message);
    }

    pub fn error(mut self, title: impl Into<String>, message: impl Into<String>) {
        self.0.write().push(ToastKind::Error, title, message);
    }

    pub fn api_error(self, err: &ApiError) {
        self.error(err.title(), err.to_string());
    }

    pub fn dismiss(mut self, id: u64) {
        self.0.write().dismiss(id);
    }
}
