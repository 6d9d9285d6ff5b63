use crate::app_shell::AppShell;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::config::AppConfig;
use crate::shared::notifications::Notifications;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Tabs, sidebar and the active-tab query parameter
    provide_context(AppGlobalContext::new());

    // Toast queue used by every screen
    provide_context(Notifications::new());

    // Empresa and page sizes, refreshed from the gateway once on startup
    let config = AppConfig::new();
    config.load();
    provide_context(config);

    view! {
        <AppShell />
    }
}
