use web_sys::HtmlInputElement;
use yew::prelude::*;

/// Live filter criteria; transient, never persisted.
#[derive(Clone, Default, PartialEq)]
pub struct FilterState {
    pub search: String,
    pub date: String,
}

pub struct UseFiltersResult {
    pub state: FilterState,
    pub actions: UseFiltersActions,
}

#[derive(Clone)]
pub struct UseFiltersActions {
    pub on_search_input: Callback<InputEvent>,
    pub on_date_change: Callback<Event>,
    pub clear: Callback<()>,
}

#[hook]
pub fn use_filters() -> UseFiltersResult {
    let search = use_state(String::new);
    let date = use_state(String::new);

    let on_search_input = {
        let search = search.clone();
        use_callback((), move |e: InputEvent, _| {
            let input: HtmlInputElement = e.target_unchecked_into();
            search.set(input.value());
        })
    };

    let on_date_change = {
        let date = date.clone();
        use_callback((), move |e: Event, _| {
            let input: HtmlInputElement = e.target_unchecked_into();
            date.set(input.value());
        })
    };

    let clear = {
        let search = search.clone();
        let date = date.clone();
        use_callback((), move |_, _| {
            search.set(String::new());
            date.set(String::new());
        })
    };

    UseFiltersResult {
        state: FilterState {
            search: (*search).clone(),
            date: (*date).clone(),
        },
        actions: UseFiltersActions {
            on_search_input,
            on_date_change,
            clear,
        },
    }
}
