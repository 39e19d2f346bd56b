use leptos::prelude::*;

/// How long a toast stays on screen
const TOAST_TIMEOUT_MS: u32 = 4_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub title: String,
    pub description: String,
}

/// Transient notifications shown in the corner of the screen
#[derive(Clone, Copy)]
pub struct ToastService {
    toasts: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u64>,
}

impl ToastService {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(0),
        }
    }

    pub fn show(&self, kind: ToastKind, title: impl Into<String>, description: impl Into<String>) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        let toast = Toast {
            id,
            kind,
            title: title.into(),
            description: description.into(),
        };
        log::debug!("toast #{}: {}", id, toast.title);
        self.toasts.update(|list| list.push(toast));

        let this = *self;
        gloo_timers::callback::Timeout::new(TOAST_TIMEOUT_MS, move || this.dismiss(id)).forget();
    }

    pub fn success(&self, title: impl Into<String>, description: impl Into<String>) {
        self.show(ToastKind::Success, title, description);
    }

    pub fn error(&self, title: impl Into<String>, description: impl Into<String>) {
        self.show(ToastKind::Error, title, description);
    }

    pub fn dismiss(&self, id: u64) {
        self.toasts.try_update(|list| list.retain(|t| t.id != id));
    }
}

impl Default for ToastService {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_toasts() -> ToastService {
    use_context::<ToastService>().expect("ToastService not provided in context")
}

#[component]
pub fn Toaster() -> impl IntoView {
    let service = use_toasts();

    view! {
        <div class="toaster" aria-live="polite">
            <For
                each=move || service.toasts.get()
                key=|toast| toast.id
                children=move |toast: Toast| {
                    let class = match toast.kind {
                        ToastKind::Success => "toast toast--success",
                        ToastKind::Error => "toast toast--error",
                    };
                    let id = toast.id;
                    view! {
                        <div class=class role="status" on:click=move |_| service.dismiss(id)>
                            <div class="toast__title">{toast.title}</div>
                            <div class="toast__description">{toast.description}</div>
                        </div>
                    }
                }
            />
        </div>
    }
}
