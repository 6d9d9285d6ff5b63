//! Top bar: sidebar toggle, title and the company the console works on

use crate::layout::global_context::AppGlobalContext;
use crate::shared::config::use_app_config;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let config = use_app_config();

    let is_sidebar_visible = move || ctx.left_open.get();

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || if is_sidebar_visible() { "Ocultar menú" } else { "Mostrar menú" }
                >
                    {move || if is_sidebar_visible() {
                        icon("panel-left-close")
                    } else {
                        icon("panel-left-open")
                    }}
                </button>
                <span class="top-header__title">"Calzado · Consola de administración"</span>
            </div>

            <div class="top-header__actions">
                <div class="top-header__user">
                    {icon("building")}
                    <span>{move || config.empresa()}</span>
                </div>
            </div>
        </div>
    }
}
