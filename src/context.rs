//! Application Context
//!
//! Shared state provided via Leptos Context API.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use venue_admin_core::notify::TOAST_LIFE_MS;
use venue_admin_core::{ApiConfig, Notification, Resource, ResourceClient};

use crate::api::FetchTransport;
use crate::store::{store_dismiss_toast, store_push_toast, ToastStore};

/// App-wide configuration and notification sink
#[derive(Clone, Copy)]
pub struct AppContext {
    config: StoredValue<ApiConfig>,
    pub toasts: ToastStore,
}

impl AppContext {
    pub fn new(config: ApiConfig, toasts: ToastStore) -> Self {
        log::info!("API base URL: {}", config.base_url());
        Self {
            config: StoredValue::new(config),
            toasts,
        }
    }

    /// REST client for one resource
    pub fn client<R: Resource>(&self) -> ResourceClient<R, FetchTransport> {
        ResourceClient::new(self.config.get_value(), FetchTransport)
    }

    /// Show a toast and schedule its removal
    pub fn notify(&self, notification: Notification) {
        let toasts = self.toasts;
        let id = store_push_toast(&toasts, notification);
        spawn_local(async move {
            TimeoutFuture::new(TOAST_LIFE_MS).await;
            store_dismiss_toast(&toasts, id);
        });
    }

    /// `notify` as an owned callback for the core flows
    pub fn notifier(&self) -> impl Fn(Notification) + 'static {
        let ctx = *self;
        move |n| ctx.notify(n)
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
