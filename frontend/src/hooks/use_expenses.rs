use gloo::dialogs::alert;
use gloo::timers::future::TimeoutFuture;
use shared::{Expense, ExpenseDraft};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::services::api::ApiClient;

/// Expense store and edit-form state owned by [`use_expenses`].
#[derive(Clone)]
pub struct ExpenseState {
    /// Last successfully fetched record list, in server order.
    pub expenses: Vec<Expense>,
    pub loading: bool,

    // Edit/create form state
    pub title: String,
    pub amount: String,
    pub date: String,
    pub description: String,
    /// Set while an existing record is loaded into the form.
    pub editing_id: Option<i64>,
    pub saving: bool,
    pub save_success: bool,
}

pub struct UseExpensesResult {
    pub state: ExpenseState,
    pub actions: UseExpensesActions,
}

#[derive(Clone)]
pub struct UseExpensesActions {
    pub refresh: Callback<()>,
    pub submit: Callback<()>,
    pub edit: Callback<i64>,
    pub delete: Callback<i64>,
    pub on_title_change: Callback<Event>,
    pub on_amount_change: Callback<Event>,
    pub on_date_change: Callback<Event>,
    pub on_description_change: Callback<Event>,
}

#[hook]
pub fn use_expenses(api_client: &ApiClient) -> UseExpensesResult {
    let expenses = use_state(Vec::<Expense>::new);
    let loading = use_state(|| true);

    let title = use_state(String::new);
    let amount = use_state(String::new);
    let date = use_state(String::new);
    let description = use_state(String::new);
    let editing_id = use_state(|| None::<i64>);
    let saving = use_state(|| false);
    let save_success = use_state(|| false);

    // Monotonic fetch counter; list responses superseded by a newer refresh
    // are discarded instead of overwriting the store with stale data.
    let fetch_epoch = use_mut_ref(|| 0u32);

    let refresh = {
        let api_client = api_client.clone();
        let expenses = expenses.clone();
        let loading = loading.clone();
        let fetch_epoch = fetch_epoch.clone();

        use_callback((), move |_, _| {
            let api_client = api_client.clone();
            let expenses = expenses.clone();
            let loading = loading.clone();
            let fetch_epoch = fetch_epoch.clone();

            let epoch = {
                let mut counter = fetch_epoch.borrow_mut();
                *counter += 1;
                *counter
            };

            spawn_local(async move {
                loading.set(true);

                match api_client.list().await {
                    Ok(records) => {
                        if *fetch_epoch.borrow() == epoch {
                            expenses.set(records);
                        } else {
                            gloo::console::warn!("Discarding stale expense list response");
                        }
                    }
                    Err(e) => {
                        gloo::console::error!("Failed to fetch expenses:", e.to_string());
                        alert("Could not load expenses.");
                    }
                }

                loading.set(false);
            });
        })
    };

    let submit = {
        let api_client = api_client.clone();
        let title = title.clone();
        let amount = amount.clone();
        let date = date.clone();
        let description = description.clone();
        let editing_id = editing_id.clone();
        let saving = saving.clone();
        let save_success = save_success.clone();
        let refresh = refresh.clone();

        use_callback((), move |_, _| {
            let api_client = api_client.clone();
            let title = title.clone();
            let amount = amount.clone();
            let date = date.clone();
            let description = description.clone();
            let editing_id = editing_id.clone();
            let saving = saving.clone();
            let save_success = save_success.clone();
            let refresh = refresh.clone();

            spawn_local(async move {
                let draft = ExpenseDraft {
                    title: (*title).clone(),
                    amount: (*amount).clone(),
                    date: (*date).clone(),
                    description: (*description).clone(),
                };
                let payload = match draft.validate() {
                    Ok(payload) => payload,
                    Err(e) => {
                        alert(&e.to_string());
                        return;
                    }
                };

                save_success.set(false);
                saving.set(true);

                let result = match *editing_id {
                    Some(id) => api_client.update(id, &payload).await,
                    None => api_client.create(&payload).await,
                };

                match result {
                    Ok(_record) => {
                        title.set(String::new());
                        amount.set(String::new());
                        date.set(String::new());
                        description.set(String::new());
                        editing_id.set(None);
                        save_success.set(true);
                        refresh.emit(());

                        let save_success_clear = save_success.clone();
                        spawn_local(async move {
                            TimeoutFuture::new(3000).await;
                            save_success_clear.set(false);
                        });
                    }
                    Err(e) => {
                        gloo::console::error!("Failed to save expense:", e.to_string());
                        alert("Could not save expense.");
                    }
                }

                saving.set(false);
            });
        })
    };

    let edit = {
        let api_client = api_client.clone();
        let title = title.clone();
        let amount = amount.clone();
        let date = date.clone();
        let description = description.clone();
        let editing_id = editing_id.clone();

        use_callback((), move |id: i64, _| {
            let api_client = api_client.clone();
            let title = title.clone();
            let amount = amount.clone();
            let date = date.clone();
            let description = description.clone();
            let editing_id = editing_id.clone();

            spawn_local(async move {
                match api_client.get(id).await {
                    Ok(record) => {
                        editing_id.set(Some(record.id));
                        title.set(record.title);
                        amount.set(record.amount);
                        date.set(record.date);
                        description.set(record.description);
                    }
                    Err(e) => {
                        gloo::console::error!("Failed to fetch expense:", e.to_string());
                        alert("Could not load expense to edit.");
                    }
                }
            });
        })
    };

    let delete = {
        let api_client = api_client.clone();
        let title = title.clone();
        let amount = amount.clone();
        let date = date.clone();
        let description = description.clone();
        let editing_id = editing_id.clone();
        let refresh = refresh.clone();

        use_callback((), move |id: i64, _| {
            let api_client = api_client.clone();
            let title = title.clone();
            let amount = amount.clone();
            let date = date.clone();
            let description = description.clone();
            let editing_id = editing_id.clone();
            let refresh = refresh.clone();

            spawn_local(async move {
                match api_client.delete(id).await {
                    Ok(()) => {
                        refresh.emit(());
                        // The deleted record may be the one loaded in the
                        // form; reset unconditionally.
                        title.set(String::new());
                        amount.set(String::new());
                        date.set(String::new());
                        description.set(String::new());
                        editing_id.set(None);
                    }
                    Err(e) => {
                        gloo::console::error!("Failed to delete expense:", e.to_string());
                        alert("Could not delete expense.");
                    }
                }
            });
        })
    };

    let on_title_change = {
        let title = title.clone();
        use_callback((), move |e: Event, _| {
            let input: HtmlInputElement = e.target_unchecked_into();
            title.set(input.value());
        })
    };

    let on_amount_change = {
        let amount = amount.clone();
        use_callback((), move |e: Event, _| {
            let input: HtmlInputElement = e.target_unchecked_into();
            amount.set(input.value());
        })
    };

    let on_date_change = {
        let date = date.clone();
        use_callback((), move |e: Event, _| {
            let input: HtmlInputElement = e.target_unchecked_into();
            date.set(input.value());
        })
    };

    let on_description_change = {
        let description = description.clone();
        use_callback((), move |e: Event, _| {
            let input: HtmlInputElement = e.target_unchecked_into();
            description.set(input.value());
        })
    };

    let state = ExpenseState {
        expenses: (*expenses).clone(),
        loading: *loading,
        title: (*title).clone(),
        amount: (*amount).clone(),
        date: (*date).clone(),
        description: (*description).clone(),
        editing_id: *editing_id,
        saving: *saving,
        save_success: *save_success,
    };

    let actions = UseExpensesActions {
        refresh,
        submit,
        edit,
        delete,
        on_title_change,
        on_amount_change,
        on_date_change,
        on_description_change,
    };

    UseExpensesResult { state, actions }
}
