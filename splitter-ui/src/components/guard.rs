//! Route Guard Component
//!
//! Renders a route only when the core router lets the navigation through;
//! otherwise redirects to where the router sent it.

use leptos::*;
use leptos_router::*;
use splitter::router::normalize_path;
use splitter::Router;

use crate::state::GlobalState;

/// What a guarded route shows for the current session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardOutcome {
    Render,
    Redirect(&'static str),
    Failed(String),
}

/// Decide a guarded route: render only when the router lands on it
pub fn guard_outcome(router: &Router, path: &str) -> GuardOutcome {
    match router.resolve(path) {
        Ok(nav) if nav.path() == normalize_path(path) => GuardOutcome::Render,
        Ok(nav) => GuardOutcome::Redirect(nav.path()),
        Err(e) => GuardOutcome::Failed(e.to_string()),
    }
}

/// Guarded route content
///
/// Re-evaluates whenever the session changes, so logging out while on a
/// protected page redirects to login.
#[component]
pub fn Guarded(
    path: &'static str,
    #[prop(optional)]
    children: Option<ChildrenFn>,
) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    move || {
        state.session.with(|_| ());

        match guard_outcome(state.app.router(), path) {
            GuardOutcome::Render => match &children {
                Some(children) => children().into_view(),
                None => view! {}.into_view(),
            },
            GuardOutcome::Redirect(to) => view! { <Redirect path=to /> }.into_view(),
            GuardOutcome::Failed(message) => view! {
                <p class="text-red-400 text-center py-12">{message}</p>
            }
            .into_view(),
        }
    }
}
