//! App Root Component
//!
//! Builds the client core, installs the router and global providers.

use leptos::*;
use leptos_router::*;
use std::sync::Arc;

use splitter::router::{EXPENSES_PATH, HOME_PATH, LOGIN_PATH, PERSONS_PATH, REGISTER_PATH};

use crate::api::{self, FetchTransport, LocalStorage};
use crate::components::{Guarded, Nav, Toast};
use crate::pages::{ExpenseList, Login, PersonList, Register};
use crate::state::provide_global_state;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    let app = splitter::App::new(
        api::get_api_base(),
        Arc::new(LocalStorage),
        Arc::new(FetchTransport),
    );
    provide_global_state(app);

    view! {
        <Router>
            <div class="min-h-screen bg-gray-900 text-white flex flex-col">
                <Nav />

                <main class="flex-1 container mx-auto px-4 py-8">
                    <Routes>
                        <Route
                            path=HOME_PATH
                            view=|| view! { <Guarded path=HOME_PATH /> }
                        />
                        <Route path=LOGIN_PATH view=Login />
                        <Route path=REGISTER_PATH view=Register />
                        <Route
                            path=EXPENSES_PATH
                            view=|| view! { <Guarded path=EXPENSES_PATH><ExpenseList /></Guarded> }
                        />
                        <Route
                            path=PERSONS_PATH
                            view=|| view! { <Guarded path=PERSONS_PATH><PersonList /></Guarded> }
                        />
                        <Route path="/*any" view=NotFound />
                    </Routes>
                </main>

                <Toast />
            </div>
        </Router>
    }
}

/// Paths outside the route table
#[component]
fn NotFound() -> impl IntoView {
    let location = use_location();

    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <h1 class="text-3xl font-bold mb-2">"No such page"</h1>
            <p class="text-gray-400 mb-6">
                {move || format!("Nothing lives at {}", location.pathname.get())}
            </p>
            <A
                href=EXPENSES_PATH
                class="px-6 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
            >
                "Go to Expenses"
            </A>
        </div>
    }
}
