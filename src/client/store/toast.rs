//! Transient notifications shown in the corner of every page.
//!
//! The [`ToastState`] lives in a context signal provided by `App`. [`notify`] pushes a toast and
//! schedules its removal after [`TOAST_DURATION_MS`].

use dioxus::core::spawn_forever;
use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::util::browser::sleep;

/// How long a toast stays on screen
pub const TOAST_DURATION_MS: u32 = 3000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    /// daisyUI alert modifier for this kind
    pub fn alert_class(&self) -> &'static str {
        match self {
            ToastKind::Success => "alert-success",
            ToastKind::Error => "alert-error",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastState {
    next_id: u64,
    pub toasts: Vec<Toast>,
}

impl ToastState {
    /// Adds a toast and returns its ID
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;

        self.toasts.push(Toast {
            id,
            kind,
            message: message.into(),
        });

        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|toast| toast.id != id);
    }

    /// Removes a toast once its timer fired, keeping it when the timer failed to run
    pub fn expire(&mut self, id: u64, timer: Result<(), String>) {
        match timer {
            Ok(()) => self.dismiss(id),
            Err(err) => tracing::error!("{}", err),
        }
    }
}

/// Shows a toast and removes it once [`TOAST_DURATION_MS`] has elapsed
///
/// The removal task is not tied to the calling component, so the toast still goes away when
/// the component that raised it unmounts first. If the timer cannot be started the toast stays
/// until it is clicked.
pub fn notify(mut toasts: Signal<ToastState>, kind: ToastKind, message: impl Into<String>) {
    let id = toasts.write().push(kind, message);

    spawn_forever(async move {
        let timer = sleep(TOAST_DURATION_MS).await;
        toasts.write().expire(id, timer);
    });
}
