//! Expenses Page
//!
//! Expense list with add/edit/delete and the per-person balance summary.

use leptos::*;
use splitter::{Expense, ExpenseRequest, Person, Summary};

use crate::components::ListSkeleton;
use crate::state::GlobalState;

/// Expenses page component
#[component]
pub fn ExpenseList() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let expenses = create_rw_signal(Vec::<Expense>::new());
    let persons = create_rw_signal(Vec::<Person>::new());
    let summary = create_rw_signal(Summary::new());
    let (loading, set_loading) = create_signal(true);
    // Bumped after every mutation to reload expenses and balances
    let version = create_rw_signal(0_u32);
    let editing = create_rw_signal(None::<Expense>);

    let state_for_effect = state.clone();
    create_effect(move |_| {
        let _ = version.get();
        let state = state_for_effect.clone();
        spawn_local(async move {
            let app = &state.app;
            match app.expenses().get_all().await {
                Ok(list) => expenses.set(list),
                Err(e) => state.show_error(&format!("Failed to load expenses: {}", e)),
            }
            match app.persons().get_all().await {
                Ok(list) => persons.set(list),
                Err(e) => state.show_error(&format!("Failed to load persons: {}", e)),
            }
            match app.expenses().get_summary().await {
                Ok(s) => summary.set(s),
                Err(e) => state.show_error(&format!("Failed to load balances: {}", e)),
            }
            set_loading.set(false);
        });
    });

    let on_delete = {
        let state = state.clone();
        move |expense: Expense| {
            let state = state.clone();
            spawn_local(async move {
                match state.app.expenses().delete(&expense.id).await {
                    Ok(()) => {
                        state.show_success(&format!("Deleted \"{}\"", expense.description));
                        version.update(|v| *v += 1);
                    }
                    Err(e) => state.show_error(&format!("Failed to delete expense: {}", e)),
                }
            });
        }
    };

    view! {
        <div class="space-y-8">
            <div>
                <h1 class="text-3xl font-bold">"Expenses"</h1>
                <p class="text-gray-400 mt-1">"Shared costs and who owes whom"</p>
            </div>

            <ExpenseForm
                persons=persons
                editing=editing
                on_saved=move || version.update(|v| *v += 1)
            />

            <div class="grid lg:grid-cols-3 gap-8">
                <section class="lg:col-span-2 bg-gray-800 rounded-xl p-6">
                    <h2 class="text-xl font-semibold mb-4">"All Expenses"</h2>
                    {move || {
                        if loading.get() {
                            return view! { <ListSkeleton rows=5 /> }.into_view();
                        }

                        let list = expenses.get();
                        if list.is_empty() {
                            view! {
                                <p class="text-gray-400 text-center py-8">"No expenses recorded yet."</p>
                            }.into_view()
                        } else {
                            let on_delete = on_delete.clone();
                            list.into_iter().map(|expense| {
                                let on_delete = on_delete.clone();
                                view! {
                                    <ExpenseRow
                                        expense=expense
                                        on_edit=move |e: Expense| editing.set(Some(e))
                                        on_delete=on_delete
                                    />
                                }
                            }).collect_view()
                        }
                    }}
                </section>

                <section class="bg-gray-800 rounded-xl p-6">
                    <h2 class="text-xl font-semibold mb-4">"Balances"</h2>
                    <BalanceSummary summary=summary />
                </section>
            </div>
        </div>
    }
}

/// Single expense entry
#[component]
fn ExpenseRow<E, D>(expense: Expense, on_edit: E, on_delete: D) -> impl IntoView
where
    E: Fn(Expense) + 'static,
    D: Fn(Expense) + 'static,
{
    let payer = expense.payer().to_string();
    let participants = expense.participants().join(", ");
    let share = expense.per_person_amount.or_else(|| {
        let n = expense.split_between.len();
        (n > 0).then(|| expense.amount / n as f64)
    });
    let to_edit = expense.clone();
    let to_delete = expense.clone();

    view! {
        <div class="flex items-start justify-between border-b border-gray-700 py-3">
            <div>
                <p class="font-medium">{expense.description.clone()}</p>
                <p class="text-sm text-gray-400">
                    "Paid by " {payer} " · split between " {participants}
                </p>
            </div>
            <div class="text-right">
                <p class="font-semibold">{format!("{:.2}", expense.amount)}</p>
                {share.map(|s| view! {
                    <p class="text-xs text-gray-500">{format!("{:.2} each", s)}</p>
                })}
                <div class="space-x-2 mt-1">
                    <button
                        on:click=move |_| on_edit(to_edit.clone())
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
                </div>
            </div>
        </div>
    }
}

/// Add/edit form; edits when `editing` holds an expense
#[component]
fn ExpenseForm<F>(
    persons: RwSignal<Vec<Person>>,
    editing: RwSignal<Option<Expense>>,
    on_saved: F,
) -> impl IntoView
where
    F: Fn() + Clone + 'static,
{
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (description, set_description) = create_signal(String::new());
    let (amount, set_amount) = create_signal(String::new());
    let (paid_by, set_paid_by) = create_signal(String::new());
    let split_between = create_rw_signal(Vec::<String>::new());
    let (saving, set_saving) = create_signal(false);

    let reset = move || {
        set_description.set(String::new());
        set_amount.set(String::new());
        set_paid_by.set(String::new());
        split_between.set(Vec::new());
    };

    create_effect(move |_| match editing.get() {
        Some(expense) => {
            set_description.set(expense.description);
            set_amount.set(expense.amount.to_string());
            set_paid_by.set(expense.paid_by);
            split_between.set(expense.split_between);
        }
        None => reset(),
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let request = match build_request(
            &description.get(),
            &amount.get(),
            &paid_by.get(),
            split_between.get(),
        ) {
            Ok(request) => request,
            Err(message) => {
                state.show_error(message);
                return;
            }
        };

        set_saving.set(true);

        let target = editing.get_untracked();
        let state = state.clone();
        let on_saved = on_saved.clone();
        spawn_local(async move {
            let expenses = state.app.expenses();
            let result = match &target {
                Some(expense) => expenses.update(&expense.id, &request).await,
                None => expenses.create(&request).await,
            };

            match result {
                Ok(saved) => {
                    let verb = if target.is_some() { "Updated" } else { "Added" };
                    state.show_success(&format!("{} \"{}\"", verb, saved.description));
                    editing.set(None);
                    reset();
                    on_saved();
                }
                Err(e) => state.show_error(&format!("Failed to save expense: {}", e)),
            }
            set_saving.set(false);
        });
    };

    let toggle_participant = move |id: String, checked: bool| {
        split_between.update(|ids| {
            ids.retain(|existing| existing != &id);
            if checked {
                ids.push(id);
            }
        });
    };

    view! {
        <form on:submit=on_submit class="bg-gray-800 rounded-xl p-6 space-y-4">
            <h2 class="text-xl font-semibold">
                {move || if editing.get().is_some() { "Edit Expense" } else { "Add Expense" }}
            </h2>

            <div class="grid md:grid-cols-3 gap-4">
                <input
                    type="text"
                    placeholder="Description"
                    prop:value=move || description.get()
                    on:input=move |ev| set_description.set(event_target_value(&ev))
                    class="md:col-span-2 bg-gray-700 rounded-lg px-4 py-3
                           border border-gray-600 focus:border-primary-500 focus:outline-none"
                />
                <input
                    type="number"
                    step="0.01"
                    min="0"
                    placeholder="Amount"
                    prop:value=move || amount.get()
                    on:input=move |ev| set_amount.set(event_target_value(&ev))
                    class="bg-gray-700 rounded-lg px-4 py-3
                           border border-gray-600 focus:border-primary-500 focus:outline-none"
                />
            </div>

            <div class="flex items-center space-x-4">
                <span class="text-sm text-gray-400">"Paid by:"</span>
                <select
                    prop:value=move || paid_by.get()
                    on:change=move |ev| set_paid_by.set(event_target_value(&ev))
                    class="bg-gray-700 rounded px-3 py-2 text-sm
                           border border-gray-600 focus:border-primary-500 focus:outline-none"
                >
                    <option value="">"Select a person"</option>
                    {move || persons.get().into_iter().map(|person| {
                        let selected = paid_by.get_untracked() == person.id;
                        view! {
                            <option value=person.id.clone() selected=selected>{person.name}</option>
                        }
                    }).collect_view()}
                </select>
            </div>

            <div>
                <span class="text-sm text-gray-400">"Split between:"</span>
                <div class="flex flex-wrap gap-4 mt-2">
                    {move || persons.get().into_iter().map(|person| {
                        let id = person.id.clone();
                        let checked_id = person.id.clone();
                        view! {
                            <label class="flex items-center space-x-2 text-sm">
                                <input
                                    type="checkbox"
                                    prop:checked=move || split_between.with(|ids| ids.contains(&checked_id))
                                    on:change=move |ev| toggle_participant(id.clone(), event_target_checked(&ev))
                                />
                                <span>{person.name}</span>
                            </label>
                        }
                    }).collect_view()}
                </div>
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

/// Validate the form fields into a request body
fn build_request(
    description: &str,
    amount: &str,
    paid_by: &str,
    split_between: Vec<String>,
) -> Result<ExpenseRequest, &'static str> {
    let description = description.trim();
    if description.is_empty() {
        return Err("Description is required");
    }

    let amount: f64 = amount
        .trim()
        .parse()
        .map_err(|_| "Amount must be a number")?;
    if !amount.is_finite() || amount <= 0.0 {
        return Err("Amount must be greater than zero");
    }

    if paid_by.is_empty() {
        return Err("Select who paid");
    }
    if split_between.is_empty() {
        return Err("Select at least one person to split with");
    }

    Ok(ExpenseRequest {
        description: description.to_string(),
        amount,
        paid_by: paid_by.to_string(),
        split_between,
    })
}

/// Net balance per person
#[component]
fn BalanceSummary(summary: RwSignal<Summary>) -> impl IntoView {
    view! {
        <ul class="space-y-2">
            {move || {
                let entries = summary.get();
                if entries.is_empty() {
                    return view! {
                        <li class="text-gray-400 text-sm">"No balances yet."</li>
                    }.into_view();
                }

                entries.into_values().map(|entry| {
                    let (class, label) = if entry.balance > 0.005 {
                        ("text-green-400", "is owed")
                    } else if entry.balance < -0.005 {
                        ("text-red-400", "owes")
                    } else {
                        ("text-gray-400", "is settled")
                    };
                    view! {
                        <li class="flex justify-between text-sm">
                            <span>{entry.name}</span>
                            <span class=class>
                                {format!("{} {:.2}", label, entry.balance.abs())}
                            </span>
                        </li>
                    }
                }).collect_view()
            }}
        </ul>
    }
}
