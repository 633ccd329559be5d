use shared::{apply_filters, remaining_balance};
use yew::prelude::*;

mod components;
mod hooks;
mod services;

use components::expense_form::ExpenseForm;
use components::expense_table::ExpenseTable;
use components::filter_bar::FilterBar;
use components::income_panel::IncomePanel;
use hooks::use_expenses::use_expenses;
use hooks::use_filters::use_filters;
use hooks::use_income::use_income;
use services::api::ApiClient;

#[function_component(App)]
fn app() -> Html {
    let api_client = use_memo((), |_| ApiClient::new());

    let expenses = use_expenses(&api_client);
    let filters = use_filters();
    let income = use_income();

    // Load the expense list once on startup.
    {
        let refresh = expenses.actions.refresh.clone();
        use_effect_with((), move |_| {
            refresh.emit(());
            || ()
        });
    }

    // The table shows the filtered view; the balance always covers the
    // full, unfiltered store.
    let visible = apply_filters(
        &expenses.state.expenses,
        &filters.state.search,
        &filters.state.date,
    );
    let remaining = remaining_balance(income.state.income, &expenses.state.expenses);

    html! {
        <>
            <header class="header">
                <div class="container">
                    <h1>{"Expense Tracker"}</h1>
                    <IncomePanel
                        income_input={income.state.input.clone()}
                        remaining={remaining}
                        on_input_change={income.actions.on_input_change.clone()}
                        on_save={income.actions.save.clone()}
                    />
                </div>
            </header>

            <main class="main">
                <div class="container">
                    <ExpenseForm
                        title={expenses.state.title.clone()}
                        amount={expenses.state.amount.clone()}
                        date={expenses.state.date.clone()}
                        description={expenses.state.description.clone()}
                        editing={expenses.state.editing_id.is_some()}
                        saving={expenses.state.saving}
                        save_success={expenses.state.save_success}
                        on_title_change={expenses.actions.on_title_change.clone()}
                        on_amount_change={expenses.actions.on_amount_change.clone()}
                        on_date_change={expenses.actions.on_date_change.clone()}
                        on_description_change={expenses.actions.on_description_change.clone()}
                        on_submit={expenses.actions.submit.clone()}
                    />

                    <FilterBar
                        search={filters.state.search.clone()}
                        date={filters.state.date.clone()}
                        on_search_input={filters.actions.on_search_input.clone()}
                        on_date_change={filters.actions.on_date_change.clone()}
                        on_clear={filters.actions.clear.clone()}
                    />

                    <ExpenseTable
                        expenses={visible}
                        loading={expenses.state.loading}
                        animate={true}
                        on_edit={expenses.actions.edit.clone()}
                        on_delete={expenses.actions.delete.clone()}
                    />
                </div>
            </main>
        </>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
