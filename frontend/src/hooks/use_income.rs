use gloo::dialogs::alert;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::services::storage;

/// Monthly income setting and its input field.
#[derive(Clone, PartialEq)]
pub struct IncomeState {
    /// Value the balance is computed from; zero until the user sets one.
    pub income: f64,
    pub input: String,
}

pub struct UseIncomeResult {
    pub state: IncomeState,
    pub actions: UseIncomeActions,
}

#[derive(Clone)]
pub struct UseIncomeActions {
    pub on_input_change: Callback<Event>,
    pub save: Callback<()>,
}

#[hook]
pub fn use_income() -> UseIncomeResult {
    // Read from local storage once at startup; written back on user action.
    let income = use_state(|| storage::load_income().unwrap_or(0.0));
    let input = use_state(|| {
        let saved = *income;
        if saved > 0.0 {
            saved.to_string()
        } else {
            String::new()
        }
    });

    let on_input_change = {
        let input = input.clone();
        use_callback((), move |e: Event, _| {
            let field: HtmlInputElement = e.target_unchecked_into();
            input.set(field.value());
        })
    };

    let save = {
        let income = income.clone();
        let input = input.clone();
        use_callback((), move |_, _| {
            match (*input).trim().parse::<f64>() {
                Ok(value) if value.is_finite() && value > 0.0 => {
                    income.set(value);
                    storage::save_income(value);
                }
                _ => alert("Please enter a valid monthly income."),
            }
        })
    };

    UseIncomeResult {
        state: IncomeState {
            income: *income,
            input: (*input).clone(),
        },
        actions: UseIncomeActions {
            on_input_change,
            save,
        },
    }
}
