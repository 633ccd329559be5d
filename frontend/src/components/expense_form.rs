use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ExpenseFormProps {
    // Form state
    pub title: String,
    pub amount: String,
    pub date: String,
    pub description: String,
    /// True while an existing record is loaded for editing.
    pub editing: bool,
    pub saving: bool,
    pub save_success: bool,

    // Event handlers
    pub on_title_change: Callback<Event>,
    pub on_amount_change: Callback<Event>,
    pub on_date_change: Callback<Event>,
    pub on_description_change: Callback<Event>,
    pub on_submit: Callback<()>,
}

#[function_component(ExpenseForm)]
pub fn expense_form(props: &ExpenseFormProps) -> Html {
    let submit_label = if props.saving {
        "Saving..."
    } else if props.editing {
        "Update Expense"
    } else {
        "Save Expense"
    };

    html! {
        <section class="expense-form-section">
            <h2>{if props.editing { "Edit Expense" } else { "Add Expense" }}</h2>

            {if props.save_success {
                html! {
                    <div class="form-message success">
                        {"Expense saved."}
                    </div>
                }
            } else { html! {} }}

            <form class="expense-form" onsubmit={
                let on_submit = props.on_submit.clone();
                Callback::from(move |e: SubmitEvent| {
                    e.prevent_default();
                    on_submit.emit(());
                })
            }>
                <div class="form-group">
                    <label for="title">{"Title"}</label>
                    <input
                        type="text"
                        id="title"
                        placeholder="Groceries, rent, tickets..."
                        value={props.title.clone()}
                        onchange={props.on_title_change.clone()}
                        disabled={props.saving}
                    />
                </div>

                <div class="form-group">
                    <label for="amount">{"Amount"}</label>
                    <input
                        type="number"
                        id="amount"
                        placeholder="0.00"
                        step="0.01"
                        min="0"
                        value={props.amount.clone()}
                        onchange={props.on_amount_change.clone()}
                        disabled={props.saving}
                    />
                </div>

                <div class="form-group">
                    <label for="date">{"Date"}</label>
                    <input
                        type="date"
                        id="date"
                        value={props.date.clone()}
                        onchange={props.on_date_change.clone()}
                        disabled={props.saving}
                    />
                </div>

                <div class="form-group">
                    <label for="description">{"Description"}</label>
                    <input
                        type="text"
                        id="description"
                        placeholder="Optional details"
                        value={props.description.clone()}
                        onchange={props.on_description_change.clone()}
                        disabled={props.saving}
                    />
                </div>

                <button
                    type="submit"
                    class="btn btn-primary save-btn"
                    disabled={props.saving}
                >
                    {submit_label}
                </button>
            </form>
        </section>
    }
}
