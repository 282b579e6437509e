//! Transient toast notifications.
//!
//! Toasts live in a context-held list and dismiss themselves after a
//! kind-dependent delay. `ToastStack` renders whatever is currently queued.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastKind {
    #[default]
    Info,
    Success,
    Error,
}

impl ToastKind {
    pub const fn duration_ms(self) -> u32 {
        match self {
            ToastKind::Info => 3_000,
            ToastKind::Success => 2_000,
            ToastKind::Error => 5_000,
        }
    }

    fn class(self) -> &'static str {
        match self {
            ToastKind::Info => "toast toast--info",
            ToastKind::Success => "toast toast--success",
            ToastKind::Error => "toast toast--error",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ToastMessage {
    pub id: Uuid,
    pub kind: ToastKind,
    pub title: String,
    pub body: Option<String>,
}

#[derive(Clone, Copy)]
pub struct Notifier {
    toasts: RwSignal<Vec<ToastMessage>>,
}

impl Notifier {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
        }
    }

    pub fn success(&self, title: impl Into<String>) {
        self.push(ToastKind::Success, title.into(), None);
    }

    pub fn error(&self, title: impl Into<String>, body: impl Into<String>) {
        let body = body.into();
        let body = (!body.trim().is_empty()).then_some(body);
        self.push(ToastKind::Error, title.into(), body);
    }

    pub fn push(&self, kind: ToastKind, title: String, body: Option<String>) {
        let id = Uuid::new_v4();
        log::debug!("toast {:?}: {}", kind, title);
        self.toasts.update(|list| {
            list.push(ToastMessage {
                id,
                kind,
                title,
                body,
            })
        });

        let toasts = self.toasts;
        Timeout::new(kind.duration_ms(), move || {
            // the owner may be gone by the time the timer fires
            let _ = toasts.try_update(|list| list.retain(|t| t.id != id));
        })
        .forget();
    }

    pub fn dismiss(&self, id: Uuid) {
        self.toasts.update(|list| list.retain(|t| t.id != id));
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_notifier() -> Notifier {
    use_context::<Notifier>().expect("Notifier not found. Provide it in App.")
}

#[component]
pub fn ToastStack() -> impl IntoView {
    let notifier = use_notifier();

    view! {
        <div class="toast-stack" role="status" aria-live="polite">
            <For
                each=move || notifier.toasts.get()
                key=|toast| toast.id
                children=move |toast: ToastMessage| {
                    let id = toast.id;
                    view! {
                        <div class=toast.kind.class() on:click=move |_| notifier.dismiss(id)>
                            <div class="toast__title">{toast.title}</div>
                            {toast.body.map(|body| view! { <div class="toast__body">{body}</div> })}
                        </div>
                    }
                }
            />
        </div>
    }
}
