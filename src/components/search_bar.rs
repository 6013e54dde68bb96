//! Search Bar
//!
//! Free-text filter for resources with a server-side search endpoint.

use leptos::ev::KeyboardEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use venue_admin_core::{search, Resource};

use crate::api::PanelHandle;
use crate::context::AppContext;

pub fn search_bar<R: Resource>(handle: PanelHandle<R>, ctx: AppContext, busy: Signal<bool>) -> impl IntoView {
    let text = RwSignal::new(String::new());
    let run = move || {
        let query = text.get_untracked();
        spawn_local(async move {
            let client = ctx.client::<R>();
            search(&handle, &client, &query, ctx.notifier()).await;
        });
    };

    view! {
        <div class="search-bar">
            <input
                type="search"
                placeholder=format!("Buscar {}", R::PLURAL)
                prop:value=move || text.get()
                on:input=move |ev| text.set(event_target_value(&ev))
                on:keydown=move |ev: KeyboardEvent| {
                    if ev.key() == "Enter" {
                        run();
                    }
                }
            />
            <button class="search-btn" disabled=move || busy.get() on:click=move |_| run()>
                "Buscar"
            </button>
        </div>
    }
}
