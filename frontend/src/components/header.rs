use yew::prelude::*;

use crate::services::theme::Theme;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub shop_name: AttrValue,
    pub theme: Theme,
    pub on_toggle_theme: Callback<()>,
    pub balances_hidden: bool,
    pub on_toggle_balances: Callback<()>,
    pub on_quick_add: Callback<()>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let on_theme_click = {
        let on_toggle_theme = props.on_toggle_theme.clone();
        Callback::from(move |_: MouseEvent| on_toggle_theme.emit(()))
    };

    let on_balance_click = {
        let on_toggle_balances = props.on_toggle_balances.clone();
        Callback::from(move |_: MouseEvent| on_toggle_balances.emit(()))
    };

    let on_quick_add_click = {
        let on_quick_add = props.on_quick_add.clone();
        Callback::from(move |_: MouseEvent| on_quick_add.emit(()))
    };

    let balance_icon = if props.balances_hidden { "fas fa-eye" } else { "fas fa-eye-slash" };
    let balance_title = if props.balances_hidden { "Show balances" } else { "Hide balances" };

    html! {
        <header class="header">
            <div class="container">
                <h1><i class="fas fa-store"></i>{" "}{props.shop_name.clone()}</h1>
                <div class="header-actions">
                    <button id="quick-action" type="button" class="btn btn-primary" onclick={on_quick_add_click}>
                        <i class="fas fa-plus"></i>{" Quick add"}
                    </button>
                    <button id="toggle-balance" type="button" class="icon-button" title={balance_title} onclick={on_balance_click}>
                        <i class={balance_icon}></i>
                    </button>
                    <button id="theme-toggle" type="button" class="icon-button" title="Toggle theme" onclick={on_theme_click}>
                        <i class={props.theme.icon_class()}></i>
                    </button>
                </div>
            </div>
        </header>
    }
}
