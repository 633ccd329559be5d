use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FilterBarProps {
    pub search: String,
    pub date: String,
    pub on_search_input: Callback<InputEvent>,
    pub on_date_change: Callback<Event>,
    pub on_clear: Callback<()>,
}

#[function_component(FilterBar)]
pub fn filter_bar(props: &FilterBarProps) -> Html {
    let on_clear = {
        let on_clear = props.on_clear.clone();
        Callback::from(move |_: MouseEvent| on_clear.emit(()))
    };

    html! {
        <section class="filter-section">
            <div class="form-group">
                <label for="search">{"Search"}</label>
                <input
                    type="text"
                    id="search"
                    placeholder="Filter by title or description"
                    value={props.search.clone()}
                    oninput={props.on_search_input.clone()}
                />
            </div>

            <div class="form-group">
                <label for="filter-date">{"Date"}</label>
                <input
                    type="date"
                    id="filter-date"
                    value={props.date.clone()}
                    onchange={props.on_date_change.clone()}
                />
            </div>

            <button class="btn clear-filters-btn" onclick={on_clear}>
                {"Clear Filters"}
            </button>
        </section>
    }
}
