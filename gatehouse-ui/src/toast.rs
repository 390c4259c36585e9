//! Toast notification sink

use leptos::*;
use std::time::Duration;

/// Auto-dismiss interval in milliseconds
const TOAST_DURATION_MS: u64 = 5000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Error,
    Success,
}

impl ToastLevel {
    fn class(self) -> &'static str {
        match self {
            ToastLevel::Error => "toast toast-error",
            ToastLevel::Success => "toast toast-success",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub id: u32,
    pub level: ToastLevel,
    pub message: String,
}

#[derive(Clone, Copy)]
pub struct Toasts {
    entries: RwSignal<Vec<Toast>>,
    next_id: RwSignal<u32>,
}

impl Toasts {
    pub fn error(&self, message: impl Into<String>) {
        self.push(ToastLevel::Error, message.into());
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(ToastLevel::Success, message.into());
    }

    pub fn dismiss(&self, id: u32) {
        self.entries.update(|entries| entries.retain(|t| t.id != id));
    }

    fn push(&self, level: ToastLevel, message: String) {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);

        self.entries.update(|entries| entries.push(Toast { id, level, message }));

        let entries = self.entries;
        set_timeout(
            move || entries.update(|entries| entries.retain(|t| t.id != id)),
            Duration::from_millis(TOAST_DURATION_MS),
        );
    }
}

/// Create the toast list and provide it as context. Called once at the app root.
pub fn provide_toasts() -> Toasts {
    let toasts = Toasts {
        entries: create_rw_signal(Vec::new()),
        next_id: create_rw_signal(0),
    };
    provide_context(toasts);
    toasts
}

pub fn use_toasts() -> Toasts {
    use_context::<Toasts>().expect("toast context must be provided")
}

/// Renders the active toast stack
#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = use_toasts();

    view! {
        <div class="toast-stack">
            {move || toasts.entries.get().into_iter().map(|toast| {
                let id = toast.id;
                view! {
                    <div class=toast.level.class()>
                        <div class="toast-message">{toast.message.clone()}</div>
                        <button
                            class="toast-close"
                            on:click=move |_| toasts.dismiss(id)
                        >
                            "✕"
                        </button>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}
