//! Resource Panel
//!
//! One CRUD screen, generic over the resource: fetch on mount, paginated
//! table, modal create/edit form, inline delete confirmation.

use chrono::Utc;
use leptos::prelude::*;
use leptos::task::spawn_local;
use venue_admin_core::form::FieldKind;
use venue_admin_core::{delete, load, save, Resource};

use super::data_table::data_table;
use super::lookups::LookupOptions;
use super::record_dialog::record_dialog;
use super::search_bar::search_bar;
use crate::api::PanelHandle;
use crate::context::use_app_context;

pub fn resource_panel<R: Resource>(title: &'static str) -> impl IntoView {
    let ctx = use_app_context();
    let handle = PanelHandle::<R>::new();
    let lookups = LookupOptions::new();
    let busy = Signal::derive(move || handle.with(|s| s.in_flight));

    // Initial fetch
    spawn_local(async move {
        let client = ctx.client::<R>();
        load(&handle, &client, ctx.notifier()).await;
    });

    // Selector options for reference fields
    for field in R::fields() {
        if let FieldKind::Reference(lookup) = field.kind {
            lookups.load(ctx, lookup);
        }
    }

    let on_save = Callback::new(move |_: ()| {
        spawn_local(async move {
            let client = ctx.client::<R>();
            save(&handle, &client, Utc::now(), ctx.notifier()).await;
        });
    });

    let on_delete = Callback::new(move |id: R::Id| {
        spawn_local(async move {
            let client = ctx.client::<R>();
            delete(&handle, &client, id, ctx.notifier()).await;
        });
    });

    let on_edit = Callback::new(move |record: R| handle.update(|s| s.open_edit(&record)));

    view! {
        <section class="panel">
            <header class="panel-header">
                <h1>{title}</h1>
                <button
                    class="add-btn"
                    disabled=move || busy.get()
                    on:click=move |_| handle.update(|s| s.open_new(Utc::now()))
                >
                    "Agregar"
                </button>
            </header>
            {R::SEARCH_PATH.map(|_| search_bar(handle, ctx, busy))}
            {data_table(handle, busy, on_edit, on_delete)}
            {record_dialog(handle, lookups, busy, on_save)}
        </section>
    }
}
