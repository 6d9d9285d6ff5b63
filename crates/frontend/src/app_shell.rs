//! Application shell: sidebar, tab bar and one `TabPage` per opened tab.

use crate::layout::center::tabs::TabBar;
use crate::layout::global_context::{AppGlobalContext, Tab as TabData};
use crate::layout::left::sidebar::Sidebar;
use crate::layout::tabs::TabPage;
use crate::layout::Shell;
use crate::shared::notifications::NotificationHost;
use leptos::logging::log;
use leptos::prelude::*;

/// Main application layout.
///
/// Initializes router integration so the active tab stays in sync with `?active=...`.
#[component]
fn MainLayout() -> impl IntoView {
    let tabs_store = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    // Runs once when the component is created.
    tabs_store.init_router_integration();

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=move || {
                view! {
                    <TabBar />
                    <For
                        each=move || {
                            let tabs = tabs_store.opened.get();
                            log!("📋 <For> each triggered. Tabs count: {}", tabs.len());
                            tabs
                        }
                        key=|tab| tab.key.clone()
                        children=move |tab: TabData| {
                            view! {
                                <TabPage tab=tab tabs_store=tabs_store />
                            }
                        }
                    />
                }.into_any()
            }
        />
        <NotificationHost />
    }
}

#[component]
pub fn AppShell() -> impl IntoView {
    view! {
        <MainLayout />
    }
}
