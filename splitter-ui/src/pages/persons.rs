//! Persons Page
//!
//! List, add, edit and delete the people expenses are split between.

use leptos::*;
use splitter::{Person, PersonRequest};

use crate::components::ListSkeleton;
use crate::state::GlobalState;

/// Persons management page
#[component]
pub fn PersonList() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let persons = create_rw_signal(Vec::<Person>::new());
    let (loading, set_loading) = create_signal(true);
    // Bumped after every mutation to reload the list
    let version = create_rw_signal(0_u32);
    let editing = create_rw_signal(None::<Person>);

    let state_for_effect = state.clone();
    create_effect(move |_| {
        let _ = version.get();
        let state = state_for_effect.clone();
        spawn_local(async move {
            match state.app.persons().get_all().await {
                Ok(list) => persons.set(list),
                Err(e) => state.show_error(&format!("Failed to load persons: {}", e)),
            }
            set_loading.set(false);
        });
    });

    let on_delete = {
        let state = state.clone();
        move |person: Person| {
            let state = state.clone();
            spawn_local(async move {
                match state.app.persons().delete(&person.id).await {
                    Ok(()) => {
                        state.show_success(&format!("Deleted {}", person.name));
                        version.update(|v| *v += 1);
                    }
                    Err(e) => state.show_error(&format!("Failed to delete person: {}", e)),
                }
            });
        }
    };

    view! {
        <div class="space-y-8">
            <div>
                <h1 class="text-3xl font-bold">"Persons"</h1>
                <p class="text-gray-400 mt-1">"People sharing expenses"</p>
            </div>

            <PersonForm editing=editing on_saved=move || version.update(|v| *v += 1) />

            <section class="bg-gray-800 rounded-xl p-6">
                {move || {
                    if loading.get() {
                        return view! { <ListSkeleton /> }.into_view();
                    }

                    let list = persons.get();
                    if list.is_empty() {
                        view! {
                            <p class="text-gray-400 text-center py-8">"No persons yet. Add the first one above."</p>
                        }.into_view()
                    } else {
                        let on_delete = on_delete.clone();
                        view! {
                            <table class="w-full text-left">
                                <thead class="text-gray-400 text-sm">
                                    <tr>
                                        <th class="py-2">"Name"</th>
                                        <th class="py-2">"Email"</th>
                                        <th class="py-2 text-right">"Actions"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {list.into_iter().map(|person| {
                                        let to_edit = person.clone();
                                        let to_delete = person.clone();
                                        let on_delete = on_delete.clone();
                                        view! {
                                            <tr class="border-t border-gray-700">
                                                <td class="py-2">{person.name}</td>
                                                <td class="py-2 text-gray-400">{person.email}</td>
                                                <td class="py-2 text-right space-x-2">
                                                    <button
                                                        on:click=move |_| editing.set(Some(to_edit.clone()))
                                                        class="text-primary-400 hover:underline text-sm"
                                                    >
                                                        "Edit"
                                                    </button>
                                                    <button
                                                        on:click=move |_| on_delete(to_delete.clone())
                                                        class="text-red-400 hover:underline text-sm"
                                                    >
                                                        "Delete"
                                                    </button>
                                                </td>
                                            </tr>
                                        }
                                    }).collect_view()}
                                </tbody>
                            </table>
                        }.into_view()
                    }
                }}
            </section>
        </div>
    }
}

/// Add/edit form; edits when `editing` holds a person
#[component]
fn PersonForm<F>(editing: RwSignal<Option<Person>>, on_saved: F) -> impl IntoView
where
    F: Fn() + Clone + 'static,
{
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (name, set_name) = create_signal(String::new());
    let (email, set_email) = create_signal(String::new());
    let (saving, set_saving) = create_signal(false);

    // Populate the fields when an edit starts
    create_effect(move |_| {
        match editing.get() {
            Some(person) => {
                set_name.set(person.name);
                set_email.set(person.email);
            }
            None => {
                set_name.set(String::new());
                set_email.set(String::new());
            }
        }
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let request = PersonRequest::new(name.get().trim(), email.get().trim());
        if request.name.is_empty() || request.email.is_empty() {
            state.show_error("Name and email are required");
            return;
        }

        set_saving.set(true);

        let target = editing.get_untracked();
        let state = state.clone();
        let on_saved = on_saved.clone();
        spawn_local(async move {
            let persons = state.app.persons();
            let result = match &target {
                Some(person) => persons.update(&person.id, &request).await,
                None => persons.create(&request).await,
            };

            match result {
                Ok(saved) => {
                    let verb = if target.is_some() { "Updated" } else { "Added" };
                    state.show_success(&format!("{} {}", verb, saved.name));
                    editing.set(None);
                    set_name.set(String::new());
                    set_email.set(String::new());
                    on_saved();
                }
                Err(e) => state.show_error(&format!("Failed to save person: {}", e)),
            }
            set_saving.set(false);
        });
    };

    view! {
        <form on:submit=on_submit class="bg-gray-800 rounded-xl p-6 space-y-4">
            <h2 class="text-xl font-semibold">
                {move || if editing.get().is_some() { "Edit Person" } else { "Add Person" }}
            </h2>

            <div class="grid md:grid-cols-2 gap-4">
                <input
                    type="text"
                    placeholder="Name"
                    prop:value=move || name.get()
                    on:input=move |ev| set_name.set(event_target_value(&ev))
                    class="bg-gray-700 rounded-lg px-4 py-3
                           border border-gray-600 focus:border-primary-500 focus:outline-none"
                />
                <input
                    type="email"
                    placeholder="Email"
                    prop:value=move || email.get()
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                    class="bg-gray-700 rounded-lg px-4 py-3
                           border border-gray-600 focus:border-primary-500 focus:outline-none"
                />
            </div>

            <div class="flex space-x-3">
                <button
                    type="submit"
                    disabled=move || saving.get()
                    class="px-6 py-2 bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                           rounded-lg font-medium transition-colors"
                >
                    {move || if saving.get() { "Saving..." } else { "Save" }}
                </button>
                {move || editing.get().map(|_| view! {
                    <button
                        type="button"
                        on:click=move |_| editing.set(None)
                        class="px-6 py-2 bg-gray-700 hover:bg-gray-600 rounded-lg transition-colors"
                    >
                        "Cancel"
                    </button>
                })}
            </div>
        </form>
    }
}
