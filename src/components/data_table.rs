//! Data Table
//!
//! Paginated rendering of a panel's collection through the resource's
//! column descriptors, with edit and delete actions per row.

use leptos::prelude::*;
use venue_admin_core::table::{Cell, PAGE_SIZE_OPTIONS};
use venue_admin_core::{LoadState, Resource};

use crate::api::PanelHandle;
use crate::components::DeleteConfirmButton;

pub fn data_table<R: Resource>(
    handle: PanelHandle<R>,
    busy: Signal<bool>,
    on_edit: Callback<R>,
    on_delete: Callback<R::Id>,
) -> impl IntoView {
    let headers = R::columns()
        .iter()
        .map(|c| view! { <th>{c.header}</th> })
        .collect_view();
    let span = R::columns().len() + 1;

    let body = move || {
        let (load, rows) = handle.with(|s| (s.load.clone(), s.page_records().to_vec()));
        match load {
            LoadState::Loading => status_row(span, "Cargando...".to_string()).into_any(),
            LoadState::Error(message) => status_row(span, message).into_any(),
            LoadState::Idle if rows.is_empty() => {
                status_row(span, format!("No hay {} registrados", R::PLURAL)).into_any()
            }
            LoadState::Idle => rows
                .into_iter()
                .map(|record| row_view(record, busy, on_edit, on_delete))
                .collect_view()
                .into_any(),
        }
    };

    view! {
        <div class="table-container">
            <table class="data-table">
                <thead>
                    <tr>
                        {headers}
                        <th class="actions">"Acciones"</th>
                    </tr>
                </thead>
                <tbody>{body}</tbody>
            </table>
            {paginator(handle)}
        </div>
    }
}

fn status_row(span: usize, message: String) -> impl IntoView {
    view! {
        <tr class="status-row">
            <td colspan=span.to_string()>{message}</td>
        </tr>
    }
}

fn row_view<R: Resource>(
    record: R,
    busy: Signal<bool>,
    on_edit: Callback<R>,
    on_delete: Callback<R::Id>,
) -> impl IntoView {
    let id = record.id();
    let cells = R::columns()
        .iter()
        .map(|c| cell_view((c.cell)(&record)))
        .collect_view();

    view! {
        <tr>
            {cells}
            <td class="actions">
                <button
                    class="edit-btn"
                    title="Editar"
                    disabled=move || busy.get()
                    on:click=move |_| on_edit.run(record.clone())
                >
                    "✎"
                </button>
                <DeleteConfirmButton
                    button_class="delete-btn"
                    disabled=busy
                    on_confirm=Callback::new(move |_| on_delete.run(id))
                />
            </td>
        </tr>
    }
}

fn cell_view(cell: Cell) -> AnyView {
    match cell {
        Cell::Text(text) => view! { <td>{text}</td> }.into_any(),
        Cell::Status { label, tone } => view! {
            <td>
                <span class=tone.css_class()>{label}</span>
            </td>
        }
        .into_any(),
    }
}

fn paginator<R: Resource>(handle: PanelHandle<R>) -> impl IntoView {
    view! {
        <div class="paginator">
            <button
                class="page-btn"
                disabled=move || handle.with(|s| s.pagination.page == 0)
                on:click=move |_| handle.update(|s| s.prev_page())
            >
                "‹"
            </button>
            <span class="page-summary">{move || handle.with(|s| s.page_summary())}</span>
            <button
                class="page-btn"
                disabled=move || handle.with(|s| s.is_last_page())
                on:click=move |_| handle.update(|s| s.next_page())
            >
                "›"
            </button>
            <select
                class="page-size"
                on:change=move |ev| {
                    if let Ok(per_page) = event_target_value(&ev).parse::<usize>() {
                        handle.update(|s| s.set_page_size(per_page));
                    }
                }
            >
                {PAGE_SIZE_OPTIONS
                    .iter()
                    .map(|n| {
                        let n = *n;
                        view! {
                            <option
                                value=n.to_string()
                                selected=move || handle.with(|s| s.pagination.per_page == n)
                            >
                                {n}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </div>
    }
}
