//! Toast Store
//!
//! Uses Leptos reactive_stores for the list of visible notifications.

use leptos::prelude::*;
use reactive_stores::Store;
use venue_admin_core::Notification;

/// A notification on screen
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub notification: Notification,
}

#[derive(Clone, Debug, Default, Store)]
pub struct ToastState {
    /// Oldest first
    pub toasts: Vec<Toast>,
    /// Last id handed out
    pub last_id: u32,
}

/// Type alias for the store
pub type ToastStore = Store<ToastState>;

// ========================
// Store Helper Functions
// ========================

/// Show a notification, returning its id
pub fn store_push_toast(store: &ToastStore, notification: Notification) -> u32 {
    let id = {
        let last_field = store.last_id();
        let mut last = last_field.write();
        *last += 1;
        *last
    };
    store.toasts().write().push(Toast { id, notification });
    id
}

/// Remove a toast by ID
pub fn store_dismiss_toast(store: &ToastStore, toast_id: u32) {
    store.toasts().write().retain(|t| t.id != toast_id);
}

/// Visible toasts, tracked
pub fn store_toasts(store: &ToastStore) -> Vec<Toast> {
    store.toasts().get()
}
