//! Record Dialog
//!
//! Modal create/edit form built from the resource's field descriptors.
//! Every keystroke goes straight into the panel's draft.

use leptos::prelude::*;
use venue_admin_core::form::{Field, FieldKind};
use venue_admin_core::Resource;

use super::lookups::LookupOptions;
use crate::api::PanelHandle;

pub fn record_dialog<R: Resource>(
    handle: PanelHandle<R>,
    lookups: LookupOptions,
    busy: Signal<bool>,
    on_save: Callback<()>,
) -> impl IntoView {
    let title = move || handle.with(|s| s.dialog.mode().map(R::dialog_title).unwrap_or_default());

    view! {
        <Show when=move || handle.with(|s| s.dialog.is_open())>
            <div class="dialog-backdrop">
                <div class="dialog" role="dialog" aria-modal="true">
                    <h2 class="dialog-title">{title}</h2>
                    <form
                        class="dialog-form"
                        on:submit=move |ev| {
                            ev.prevent_default();
                            on_save.run(());
                        }
                    >
                        {R::fields()
                            .into_iter()
                            .map(|field| field_row(handle, lookups, field))
                            .collect_view()}
                        <div class="dialog-actions">
                            <button
                                type="button"
                                class="cancel-btn"
                                disabled=move || busy.get()
                                on:click=move |_| handle.update(|s| s.close_dialog())
                            >
                                "Cancelar"
                            </button>
                            <button type="submit" class="save-btn" disabled=move || busy.get()>
                                {move || if busy.get() { "Guardando..." } else { "Guardar" }}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </Show>
    }
}

fn field_row<R: Resource>(handle: PanelHandle<R>, lookups: LookupOptions, field: Field<R>) -> impl IntoView {
    let value = move || handle.with(|s| s.draft().map(|d| (field.read)(d)).unwrap_or_default());
    let write = move |raw: String| handle.update(|s| s.edit_draft(|d| (field.write)(d, &raw)));

    let input = match field.kind {
        FieldKind::Choice(options) => view! {
            <select id=field.id on:change=move |ev| write(event_target_value(&ev))>
                <option value="" selected=move || value().is_empty()>"Seleccione..."</option>
                {options
                    .iter()
                    .map(|opt| {
                        let opt: &'static str = opt;
                        view! {
                            <option value=opt selected=move || value() == opt>
                                {opt}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        }
        .into_any(),
        FieldKind::Reference(lookup) => view! {
            <select id=field.id on:change=move |ev| write(event_target_value(&ev))>
                <option value="" selected=move || value().is_empty()>"Seleccione..."</option>
                {move || {
                    lookups
                        .options(lookup)
                        .into_iter()
                        .map(|opt| {
                            let selected_value = opt.value.clone();
                            view! {
                                <option value=opt.value selected=move || value() == selected_value>
                                    {opt.label}
                                </option>
                            }
                        })
                        .collect_view()
                }}
            </select>
        }
        .into_any(),
        kind => view! {
            <input
                id=field.id
                type=kind.input_type()
                step=(kind == FieldKind::Decimal).then_some("any")
                prop:value=value
                on:input=move |ev| write(event_target_value(&ev))
            />
        }
        .into_any(),
    };

    view! {
        <div class="form-field">
            <label for=field.id>{field.label}</label>
            {input}
        </div>
    }
}
