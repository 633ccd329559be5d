use shared::Expense;
use yew::prelude::*;

/// Entrance delay added per row position when cascade animation is on.
const ROW_STAGGER_MS: usize = 50;

#[derive(Properties, PartialEq)]
pub struct ExpenseTableProps {
    /// Records to render, already filtered and ordered by the caller.
    pub expenses: Vec<Expense>,
    pub loading: bool,
    /// Stagger each row's entrance by [`ROW_STAGGER_MS`] times its index.
    pub animate: bool,
    pub on_edit: Callback<i64>,
    pub on_delete: Callback<i64>,
}

#[function_component(ExpenseTable)]
pub fn expense_table(props: &ExpenseTableProps) -> Html {
    html! {
        <section class="expenses-section">
            <h2>{"Expenses"}</h2>

            {if props.loading {
                html! { <div class="loading">{"Loading expenses..."}</div> }
            } else {
                html! {
                    <div class="table-container">
                        <table class="expense-table">
                            <thead>
                                <tr>
                                    <th>{"Title"}</th>
                                    <th>{"Amount"}</th>
                                    <th>{"Date"}</th>
                                    <th>{"Description"}</th>
                                    <th>{"Actions"}</th>
                                </tr>
                            </thead>
                            <tbody>
                                {for props.expenses.iter().enumerate().map(|(index, expense)| {
                                    let on_edit = {
                                        let on_edit = props.on_edit.clone();
                                        let id = expense.id;
                                        Callback::from(move |_: MouseEvent| on_edit.emit(id))
                                    };
                                    let on_delete = {
                                        let on_delete = props.on_delete.clone();
                                        let id = expense.id;
                                        Callback::from(move |_: MouseEvent| on_delete.emit(id))
                                    };
                                    let row_class = classes!(
                                        "expense-row",
                                        props.animate.then_some("row-enter"),
                                    );
                                    let row_style = props
                                        .animate
                                        .then(|| format!("animation-delay: {}ms", index * ROW_STAGGER_MS));

                                    html! {
                                        <tr key={expense.id.to_string()} class={row_class} style={row_style}>
                                            <td class="title">{&expense.title}</td>
                                            <td class="amount">{format!("{:.2}", expense.amount_value())}</td>
                                            <td class="date">{&expense.date}</td>
                                            <td class="description">{&expense.description}</td>
                                            <td class="actions">
                                                <button class="edit-btn" onclick={on_edit}>{"Edit"}</button>
                                                <button class="delete-btn" onclick={on_delete}>{"Delete"}</button>
                                            </td>
                                        </tr>
                                    }
                                })}
                            </tbody>
                        </table>
                    </div>
                }
            }}
        </section>
    }
}
