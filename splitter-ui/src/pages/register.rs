//! Register Page

use leptos::*;
use leptos_router::*;
use splitter::router::LOGIN_PATH;

use crate::pages::CredentialsForm;
use crate::state::GlobalState;

/// Registration page component
#[component]
pub fn Register() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let navigate = use_navigate();
    let (submitting, set_submitting) = create_signal(false);

    let on_submit = move |username: String, password: String| {
        set_submitting.set(true);

        let state = state.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            match state.app.auth().register(&username, &password).await {
                Ok(message) => {
                    let message = if message.trim().is_empty() {
                        "Registration successful".to_string()
                    } else {
                        message
                    };
                    state.show_success(&format!("{}. Please log in.", message.trim_end_matches('.')));
                    navigate(LOGIN_PATH, Default::default());
                }
                Err(e) => {
                    state.show_error(&format!("Registration failed: {}", e));
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="max-w-md mx-auto space-y-6">
            <div>
                <h1 class="text-3xl font-bold">"Register"</h1>
                <p class="text-gray-400 mt-1">"Create an account"</p>
            </div>

            <CredentialsForm
                submit_label="Register"
                busy_label="Registering..."
                submitting=submitting
                on_submit=on_submit
            />

            <p class="text-gray-400 text-sm">
                "Already registered? "
                <A href=LOGIN_PATH class="text-primary-400 hover:underline">"Login"</A>
            </p>
        </div>
    }
}
