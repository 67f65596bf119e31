//! Pages
//!
//! Top-level page components for each route.

pub mod expenses;
pub mod login;
pub mod persons;
pub mod register;

pub use expenses::ExpenseList;
pub use login::Login;
pub use persons::PersonList;
pub use register::Register;

use leptos::*;

/// Username/password form shared by login and registration
#[component]
pub(crate) fn CredentialsForm<F>(
    submit_label: &'static str,
    busy_label: &'static str,
    submitting: ReadSignal<bool>,
    on_submit: F,
) -> impl IntoView
where
    F: Fn(String, String) + 'static,
{
    let state = use_context::<crate::state::GlobalState>().expect("GlobalState not found");

    let (username, set_username) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let u = username.get();
        let p = password.get();

        if u.trim().is_empty() || p.is_empty() {
            state.show_error("Username and password are required");
            return;
        }

        on_submit(u.trim().to_string(), p);
    };

    view! {
        <form on:submit=submit class="bg-gray-800 rounded-xl p-6 space-y-4">
            <div>
                <label class="block text-sm text-gray-400 mb-2">"Username"</label>
                <input
                    type="text"
                    autocomplete="username"
                    prop:value=move || username.get()
                    on:input=move |ev| set_username.set(event_target_value(&ev))
                    class="w-full bg-gray-700 rounded-lg px-4 py-3
                           border border-gray-600 focus:border-primary-500 focus:outline-none"
                />
            </div>

            <div>
                <label class="block text-sm text-gray-400 mb-2">"Password"</label>
                <input
                    type="password"
                    autocomplete="current-password"
                    prop:value=move || password.get()
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                    class="w-full bg-gray-700 rounded-lg px-4 py-3
                           border border-gray-600 focus:border-primary-500 focus:outline-none"
                />
            </div>

            <button
                type="submit"
                disabled=move || submitting.get()
                class="w-full px-4 py-3 bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                       rounded-lg font-medium transition-colors"
            >
                {move || if submitting.get() { busy_label } else { submit_label }}
            </button>
        </form>
    }
}
