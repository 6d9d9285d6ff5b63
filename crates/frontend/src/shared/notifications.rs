//! Non-blocking toasts. Any screen pushes a `Notice`; it disappears on its own.

use contracts::shared::notice::Notice;
use leptos::prelude::*;
use leptos::task::spawn_local;
use uuid::Uuid;

const DISMISS_AFTER_MS: u32 = 4_000;

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: Uuid,
    pub notice: Notice,
}

#[derive(Clone, Copy)]
pub struct Notifications {
    items: RwSignal<Vec<Toast>>,
}

impl Default for Notifications {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifications {
    pub fn new() -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
        }
    }

    pub fn push(&self, notice: Notice) {
        let id = Uuid::new_v4();
        self.items.update(|items| items.push(Toast { id, notice }));

        let this = *self;
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(DISMISS_AFTER_MS).await;
            this.dismiss(id);
        });
    }

    pub fn dismiss(&self, id: Uuid) {
        self.items.update(|items| items.retain(|t| t.id != id));
    }
}

pub fn use_notifications() -> Notifications {
    use_context::<Notifications>().expect("Notifications not found in context")
}

#[component]
pub fn NotificationHost() -> impl IntoView {
    let notifications = use_notifications();

    view! {
        <div class="toast-stack">
            <For
                each=move || notifications.items.get()
                key=|toast| toast.id
                children=move |toast: Toast| {
                    let id = toast.id;
                    view! {
                        <div class=format!("toast {}", toast.notice.kind.css_class())>
                            <span class="toast__message">{toast.notice.message}</span>
                            <button class="toast__close" on:click=move |_| notifications.dismiss(id)>
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
