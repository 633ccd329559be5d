use shared::{format_balance, BalanceStatus};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct IncomePanelProps {
    pub income_input: String,
    /// Income minus the summed amounts of the full store.
    pub remaining: f64,
    pub on_input_change: Callback<Event>,
    pub on_save: Callback<()>,
}

#[function_component(IncomePanel)]
pub fn income_panel(props: &IncomePanelProps) -> Html {
    let on_save = {
        let on_save = props.on_save.clone();
        Callback::from(move |_: MouseEvent| on_save.emit(()))
    };

    let balance_class = match BalanceStatus::of(props.remaining) {
        BalanceStatus::NonNegative => "balance-amount positive",
        BalanceStatus::Negative => "balance-amount negative",
    };

    html! {
        <section class="income-section">
            <div class="form-group">
                <label for="income">{"Monthly Income"}</label>
                <input
                    type="number"
                    id="income"
                    placeholder="0.00"
                    step="0.01"
                    min="0"
                    value={props.income_input.clone()}
                    onchange={props.on_input_change.clone()}
                />
                <button class="btn set-income-btn" onclick={on_save}>
                    {"Set Income"}
                </button>
            </div>

            <div class="balance-display">
                <span class="balance-label">{"Remaining Balance:"}</span>
                <span class={balance_class}>{format_balance(props.remaining)}</span>
            </div>
        </section>
    }
}
