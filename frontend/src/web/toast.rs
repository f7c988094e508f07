//! 通知中心
//!
//! Transient toasts, newest on top, each dismissed after a fixed delay.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use riyadah_client::{Notice, NoticeLevel, Notifier};

const DISMISS_AFTER_MS: u32 = 4_000;

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub notice: Notice,
}

#[derive(Clone, Copy)]
pub struct Toaster {
    toasts: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u64>,
}

impl Toaster {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(0),
        }
    }

    pub fn toasts(&self) -> ReadSignal<Vec<Toast>> {
        self.toasts.read_only()
    }

    pub fn dismiss(&self, id: u64) {
        // 宿主组件可能已被销毁
        self.toasts.try_update(|list| list.retain(|t| t.id != id));
    }
}

impl Default for Toaster {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for Toaster {
    fn notify(&self, notice: Notice) {
        match notice.level {
            NoticeLevel::Success => log::info!("[toast] {}", notice.message),
            NoticeLevel::Error => log::warn!("[toast] {}", notice.message),
        }

        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        self.toasts.update(|list| list.insert(0, Toast { id, notice }));

        let toaster = *self;
        Timeout::new(DISMISS_AFTER_MS, move || toaster.dismiss(id)).forget();
    }
}

pub fn use_toaster() -> Toaster {
    use_context::<Toaster>().expect("Toaster should be provided")
}

#[component]
pub fn ToastHost() -> impl IntoView {
    let toaster = use_toaster();

    view! {
        <div class="toast toast-top toast-end z-50">
            <For
                each=move || toaster.toasts().get()
                key=|toast| toast.id
                children=move |toast: Toast| {
                    let class = match toast.notice.level {
                        NoticeLevel::Success => "alert alert-success shadow-lg",
                        NoticeLevel::Error => "alert alert-error shadow-lg",
                    };
                    let id = toast.id;
                    view! {
                        <div class=class role="alert" on:click=move |_| toaster.dismiss(id)>
                            <span>{toast.notice.message}</span>
                        </div>
                    }
                }
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_toaster_starts_empty() {
        let toaster = Toaster::default();
        toaster.dismiss(3);
        assert!(toaster.toasts().get_untracked().is_empty());
    }
}
