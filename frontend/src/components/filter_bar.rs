use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::services::customer_filter::TableFilter;

#[derive(Properties, PartialEq)]
pub struct FilterBarProps {
    pub filter: TableFilter,
    pub categories: Vec<String>,
    pub on_change: Callback<TableFilter>,
}

/// Search box plus category and balance selects; every change is applied immediately
#[function_component(FilterBar)]
pub fn filter_bar(props: &FilterBarProps) -> Html {
    let on_search = {
        let filter = props.filter.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_change.emit(TableFilter { search: input.value(), ..filter.clone() });
        })
    };

    let on_category = {
        let filter = props.filter.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            on_change.emit(TableFilter { category: select.value(), ..filter.clone() });
        })
    };

    let on_balance = {
        let filter = props.filter.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            on_change.emit(TableFilter { balance: select.value(), ..filter.clone() });
        })
    };

    let balance_options = [
        ("", "All balances"),
        ("positive", "Owes money"),
        ("negative", "In credit"),
        ("zero", "Settled"),
    ];

    html! {
        <div class="filter-bar">
            <div class="search-box">
                <i class="fas fa-search"></i>
                <input
                    id="customer-search"
                    type="text"
                    placeholder="Search by name or phone"
                    value={props.filter.search.clone()}
                    oninput={on_search}
                />
            </div>
            <select id="category-filter" onchange={on_category}>
                <option value="" selected={props.filter.category.is_empty()}>{"All categories"}</option>
                { for props.categories.iter().map(|category| html! {
                    <option value={category.clone()} selected={props.filter.category == *category}>
                        {category.clone()}
                    </option>
                }) }
            </select>
            <select id="balance-filter" onchange={on_balance}>
                { for balance_options.iter().map(|(value, label)| html! {
                    <option value={*value} selected={props.filter.balance == *value}>{*label}</option>
                }) }
            </select>
        </div>
    }
}
