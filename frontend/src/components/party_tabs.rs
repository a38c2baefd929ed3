use shared::PartyKind;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PartyTabsProps {
    pub selected: PartyKind,
    pub on_select: Callback<PartyKind>,
}

#[function_component(PartyTabs)]
pub fn party_tabs(props: &PartyTabsProps) -> Html {
    let tab = |kind: PartyKind, icon: &'static str, label: &'static str| {
        let on_select = props.on_select.clone();
        let onclick = Callback::from(move |_: MouseEvent| on_select.emit(kind));
        html! {
            <button
                type="button"
                class={classes!("tab", (props.selected == kind).then_some("active"))}
                {onclick}
            >
                <i class={icon}></i>{" "}{label}
            </button>
        }
    };

    html! {
        <nav class="tabs">
            { tab(PartyKind::Customer, "fas fa-users", "Customers") }
            { tab(PartyKind::Supplier, "fas fa-truck", "Suppliers") }
        </nav>
    }
}
