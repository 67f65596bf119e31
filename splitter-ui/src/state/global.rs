//! Global Application State
//!
//! Reactive state management using Leptos signals.

use leptos::*;
use splitter::{App, Session};

/// Global application state provided to all components
#[derive(Clone)]
pub struct GlobalState {
    /// Services, session store and router
    pub app: App,
    /// Mirror of the stored session; views track it to re-run the guard
    pub session: RwSignal<Option<Session>>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
}

/// Provide global state to the component tree
pub fn provide_global_state(app: App) {
    let session = app.token_store().session();

    let state = GlobalState {
        app,
        session: create_rw_signal(session),
        error: create_rw_signal(None),
        success: create_rw_signal(None),
    };

    provide_context(state);
}

impl GlobalState {
    /// Re-read the session from storage after login or logout
    pub fn refresh_session(&self) {
        self.session.set(self.app.token_store().session());
    }

    pub fn username(&self) -> Option<String> {
        self.session.get().and_then(|session| session.username)
    }

    /// Show a success message for three seconds
    pub fn show_success(&self, message: &str) {
        flash(self.success, message, 3000);
    }

    /// Show an error message for five seconds
    pub fn show_error(&self, message: &str) {
        flash(self.error, message, 5000);
    }
}

/// Set a message and clear it after `millis`, unless a newer one replaced it
fn flash(slot: RwSignal<Option<String>>, message: &str, millis: u32) {
    let message = message.to_string();
    slot.set(Some(message.clone()));

    gloo_timers::callback::Timeout::new(millis, move || {
        slot.update(|current| {
            if current.as_deref() == Some(message.as_str()) {
                *current = None;
            }
        });
    })
    .forget();
}
