//! Toast notifications.
//!
//! A context signal holds the visible stack; [`push_toast`] appends a toast
//! and schedules its dismissal. [`ToastProvider`] owns the signal and
//! renders the overlay above the app.

use std::time::Duration;

use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaCircleCheck, FaCircleExclamation};
use dioxus_free_icons::Icon;

const DISMISS_AFTER: Duration = Duration::from_secs(4);

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ToastLevel {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub level: ToastLevel,
    pub message: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastStack {
    pub toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastStack {
    /// Append a toast and return its id.
    pub fn push(&mut self, level: ToastLevel, message: &str) -> u64 {
        self.next_id += 1;
        self.toasts.push(Toast {
            id: self.next_id,
            level,
            message: message.to_string(),
        });
        self.next_id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|toast| toast.id != id);
    }
}

pub fn use_toasts() -> Signal<ToastStack> {
    use_context::<Signal<ToastStack>>()
}

/// Show a toast and schedule its dismissal.
pub fn push_toast(stack: &mut Signal<ToastStack>, level: ToastLevel, message: &str) {
    let id = stack.write().push(level, message);

    let mut stack = *stack;
    spawn(async move {
        sleep(DISMISS_AFTER).await;
        stack.write().dismiss(id);
    });
}

async fn sleep(duration: Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}

/// Provider component that owns the toast stack and renders the overlay.
#[component]
pub fn ToastProvider(children: Element) -> Element {
    let toasts = use_signal(ToastStack::default);
    use_context_provider(|| toasts);

    rsx! {
        {children}
        ToastOverlay {}
    }
}

#[component]
fn ToastOverlay() -> Element {
    let stack = use_toasts();

    rsx! {
        document::Link { rel: "stylesheet", href: crate::UI_CSS }
        div { class: "toast-stack",
            for toast in stack().toasts {
                ToastView { key: "{toast.id}", toast: toast.clone() }
            }
        }
    }
}

#[component]
fn ToastView(toast: Toast) -> Element {
    let (class, icon) = match toast.level {
        ToastLevel::Success => (
            "toast toast-success",
            rsx! { Icon { icon: FaCircleCheck, width: 16, height: 16 } },
        ),
        ToastLevel::Error => (
            "toast toast-error",
            rsx! { Icon { icon: FaCircleExclamation, width: 16, height: 16 } },
        ),
    };

    rsx! {
        div { class: "{class}",
            {icon}
            span { class: "toast-message", "{toast.message}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_assigns_unique_ids() {
        let mut stack = ToastStack::default();
        let first = stack.push(ToastLevel::Success, "saved");
        let second = stack.push(ToastLevel::Error, "failed");
        assert_ne!(first, second);
        assert_eq!(stack.toasts.len(), 2);
    }

    #[test]
    fn test_dismiss_removes_only_the_target() {
        let mut stack = ToastStack::default();
        let first = stack.push(ToastLevel::Success, "one");
        let second = stack.push(ToastLevel::Success, "two");

        stack.dismiss(first);
        let remaining: Vec<u64> = stack.toasts.iter().map(|t| t.id).collect();
        assert_eq!(remaining, vec![second]);
    }
}
