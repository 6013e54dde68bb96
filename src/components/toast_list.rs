//! Toast List Component

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::{store_dismiss_toast, store_toasts};

/// Stack of transient notifications; each one can also be closed by hand
#[component]
pub fn ToastList() -> impl IntoView {
    let toasts = use_app_context().toasts;

    view! {
        <div class="toast-stack" aria-live="polite">
            <For
                each=move || store_toasts(&toasts)
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    let n = toast.notification;
                    view! {
                        <div class=n.severity.css_class() role="status">
                            <strong class="toast-summary">{n.summary}</strong>
                            <span class="toast-detail">{n.detail}</span>
                            <button class="toast-close" on:click=move |_| store_dismiss_toast(&toasts, id)>
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
