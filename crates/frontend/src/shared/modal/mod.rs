use crate::shared::icons::icon;
use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;

/// Confirmation dialog. Escape and overlay clicks cancel.
#[component]
pub fn ConfirmModal(
    /// Title of the modal
    #[prop(into)]
    title: String,
    /// Question shown in the body
    #[prop(into)]
    message: String,
    /// Label of the confirm button
    #[prop(optional, into)]
    confirm_label: Option<String>,
    /// Disables both buttons while the confirmed action runs
    #[prop(into)]
    busy: Signal<bool>,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let confirm_label = confirm_label.unwrap_or_else(|| "Delete".to_string());

    // Handle Escape key
    let closure = Closure::wrap(Box::new(move |event: web_sys::Event| {
        if let Some(keyboard_event) = event.dyn_ref::<KeyboardEvent>() {
            if keyboard_event.key() == "Escape" {
                on_cancel.run(());
            }
        }
    }) as Box<dyn FnMut(_)>);
    if let Some(window) = web_sys::window() {
        let _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    }
    // the listener must not outlive the dialog
    let listener = StoredValue::new_local(closure);
    on_cleanup(move || {
        if let Some(window) = web_sys::window() {
            listener.try_with_value(|f| {
                let _ = window.remove_event_listener_with_callback("keydown", f.as_ref().unchecked_ref());
            });
        }
    });

    let stop_propagation = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
    };

    view! {
        <div class="modal-overlay" on:click=move |_| on_cancel.run(())>
            <div class="modal modal--confirm" on:click=stop_propagation>
                <div class="modal-header">
                    <h2 class="modal-title">{title}</h2>
                    <button class="button button--icon modal__close" on:click=move |_| on_cancel.run(())>
                        {icon("x")}
                    </button>
                </div>
                <div class="modal-body">
                    <p>{message}</p>
                </div>
                <div class="modal-footer">
                    <button
                        class="button button--secondary"
                        disabled=move || busy.get()
                        on:click=move |_| on_cancel.run(())
                    >
                        "Cancel"
                    </button>
                    <button
                        class="button button--danger"
                        disabled=move || busy.get()
                        on:click=move |_| on_confirm.run(())
                    >
                        {move || if busy.get() { "Deleting...".to_string() } else { confirm_label.clone() }}
                    </button>
                </div>
            </div>
        </div>
    }
}
