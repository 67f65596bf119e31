//! Toast Notifications
//!
//! Success and error messages from `GlobalState`, each dismissable.

use leptos::*;

use crate::state::GlobalState;

/// Fixed-position stack of the current messages
#[component]
pub fn Toast() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let success = state.success;
    let error = state.error;

    view! {
        <div class="fixed bottom-4 right-4 z-50 space-y-2 max-w-sm">
            {move || success.get().map(|text| view! {
                <Notice text=text kind=NoticeKind::Success on_dismiss=move || success.set(None) />
            })}
            {move || error.get().map(|text| view! {
                <Notice text=text kind=NoticeKind::Error on_dismiss=move || error.set(None) />
            })}
        </div>
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum NoticeKind {
    Success,
    Error,
}

impl NoticeKind {
    fn class(self) -> &'static str {
        match self {
            NoticeKind::Success => "bg-green-600",
            NoticeKind::Error => "bg-red-600",
        }
    }

    /// Errors interrupt screen readers, successes wait
    fn role(self) -> &'static str {
        match self {
            NoticeKind::Success => "status",
            NoticeKind::Error => "alert",
        }
    }
}

#[component]
fn Notice<F>(text: String, kind: NoticeKind, on_dismiss: F) -> impl IntoView
where
    F: Fn() + 'static,
{
    view! {
        <div
            role=kind.role()
            class=format!("flex items-start justify-between gap-3 {} text-white px-4 py-3 rounded-lg shadow-lg", kind.class())
        >
            <span class="text-sm font-medium">{text}</span>
            <button
                on:click=move |_| on_dismiss()
                class="text-white/70 hover:text-white text-sm"
                aria-label="Dismiss"
            >
                "×"
            </button>
        </div>
    }
}
