use crate::shared::icons::icon;
use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;

#[component]
pub fn Modal(
    #[prop(into)]
    title: String,
    /// Called on Escape, overlay click or the close button
    on_close: Callback<()>,
    /// Buttons shown in the footer (Guardar, Cancelar...)
    #[prop(optional, into)]
    action_buttons: Option<ViewFn>,
    children: Children,
) -> impl IntoView {
    let closure = Closure::wrap(Box::new(move |event: web_sys::Event| {
        if let Some(keyboard_event) = event.dyn_ref::<KeyboardEvent>() {
            if keyboard_event.key() == "Escape" {
                on_close.run(());
            }
        }
    }) as Box<dyn FnMut(_)>);
    let listener: js_sys::Function = closure.as_ref().unchecked_ref::<js_sys::Function>().clone();
    closure.forget();

    if let Some(window) = web_sys::window() {
        if let Err(e) = window.add_event_listener_with_callback("keydown", &listener) {
            log::warn!("modal: keydown listener not attached: {:?}", e);
        }
    }
    let listener = StoredValue::new_local(listener);
    on_cleanup(move || {
        if let Some(window) = web_sys::window() {
            if let Err(e) =
                window.remove_event_listener_with_callback("keydown", &listener.get_value())
            {
                log::warn!("modal: keydown listener not removed: {:?}", e);
            }
        }
    });

    let stop_propagation = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
    };

    view! {
        <div class="modal-overlay" on:click=move |_| on_close.run(())>
            <div class="modal" on:click=stop_propagation>
                <div class="modal-header">
                    <h2 class="modal-title">{title}</h2>
                    <button class="button button--icon modal__close" on:click=move |_| on_close.run(())>
                        {icon("x")}
                    </button>
                </div>
                <div class="modal-body">
                    {children()}
                </div>
                {action_buttons.map(|buttons| view! {
                    <div class="modal-footer">{buttons.run()}</div>
                })}
            </div>
        </div>
    }
}
