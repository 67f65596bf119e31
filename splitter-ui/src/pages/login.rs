//! Login Page

use leptos::*;
use leptos_router::*;
use splitter::router::{EXPENSES_PATH, REGISTER_PATH};

use crate::pages::CredentialsForm;
use crate::state::GlobalState;

/// Login page component
#[component]
pub fn Login() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let navigate = use_navigate();
    let (submitting, set_submitting) = create_signal(false);

    let on_submit = move |username: String, password: String| {
        set_submitting.set(true);

        let state = state.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            match state.app.auth().login(&username, &password).await {
                Ok(_) => {
                    state.refresh_session();
                    if state.app.token_store().is_logged_in() {
                        state.show_success(&format!("Welcome, {}", username));
                        navigate(EXPENSES_PATH, Default::default());
                    } else {
                        state.show_error("Login failed: no token received");
                    }
                }
                Err(e) => {
                    state.show_error(&format!("Login failed: {}", e));
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="max-w-md mx-auto space-y-6">
            <div>
                <h1 class="text-3xl font-bold">"Login"</h1>
                <p class="text-gray-400 mt-1">"Sign in to manage shared expenses"</p>
            </div>

            <CredentialsForm
                submit_label="Login"
                busy_label="Logging in..."
                submitting=submitting
                on_submit=on_submit
            />

            <p class="text-gray-400 text-sm">
                "No account yet? "
                <A href=REGISTER_PATH class="text-primary-400 hover:underline">"Register"</A>
            </p>
        </div>
    }
}
