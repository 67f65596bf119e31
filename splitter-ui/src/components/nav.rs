//! Navigation Component
//!
//! Header navigation bar with links, the logged-in user and logout.

use leptos::*;
use leptos_router::*;
use splitter::router::{EXPENSES_PATH, LOGIN_PATH, PERSONS_PATH, REGISTER_PATH};

use crate::state::GlobalState;

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let navigate = use_navigate();

    let state_for_logout = state.clone();
    let logout = move |_: ev::MouseEvent| {
        state_for_logout.app.auth().logout();
        state_for_logout.refresh_session();
        state_for_logout.show_success("Logged out");
        navigate(LOGIN_PATH, Default::default());
    };

    let session = state.session;

    view! {
        <nav class="bg-gray-800 border-b border-gray-700">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    <A href=EXPENSES_PATH class="flex items-center space-x-3">
                        <span class="text-xl font-bold text-white">"Expense Splitter"</span>
                    </A>

                    <div class="flex items-center space-x-1">
                        <NavLink href=EXPENSES_PATH label="Expenses" />
                        <NavLink href=PERSONS_PATH label="Persons" />

                        {move || match session.get() {
                            Some(_) => view! {
                                <span class="px-4 text-gray-400 text-sm">
                                    {state.username().unwrap_or_default()}
                                </span>
                                <button
                                    on:click=logout.clone()
                                    class="px-4 py-2 rounded-lg text-gray-300 hover:text-white hover:bg-gray-700 transition-colors"
                                >
                                    "Logout"
                                </button>
                            }.into_view(),
                            None => view! {
                                <NavLink href=LOGIN_PATH label="Login" />
                                <NavLink href=REGISTER_PATH label="Register" />
                            }.into_view(),
                        }}
                    </div>
                </div>
            </div>
        </nav>
    }
}

/// Individual navigation link
#[component]
fn NavLink(
    href: &'static str,
    label: &'static str,
) -> impl IntoView {
    view! {
        <A
            href=href
            class="px-4 py-2 rounded-lg text-gray-300 hover:text-white hover:bg-gray-700 transition-colors"
            active_class="bg-gray-700 text-white"
        >
            {label}
        </A>
    }
}
