//! Row delete action with an inline "¿Eliminar?" step.

use leptos::prelude::*;

#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] button_class: String,
    /// True while the panel has a request outstanding
    #[prop(into)]
    disabled: Signal<bool>,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let asking = RwSignal::new(false);
    let button_class = StoredValue::new(button_class);

    // A request started elsewhere withdraws the question
    Effect::new(move |_| {
        if disabled.get() {
            asking.set(false);
        }
    });

    move || {
        if asking.get() {
            view! {
                <span class="delete-confirm">
                    <span class="delete-confirm-text">"¿Eliminar?"</span>
                    <button
                        class="confirm-btn"
                        title="Confirmar"
                        on:click=move |_| {
                            asking.set(false);
                            on_confirm.run(());
                        }
                    >
                        "✓"
                    </button>
                    <button class="cancel-btn" title="Cancelar" on:click=move |_| asking.set(false)>
                        "✗"
                    </button>
                </span>
            }
            .into_any()
        } else {
            view! {
                <button
                    class=button_class.get_value()
                    title="Eliminar"
                    disabled=move || disabled.get()
                    on:click=move |_| asking.set(true)
                >
                    "🗑"
                </button>
            }
            .into_any()
        }
    }
}
