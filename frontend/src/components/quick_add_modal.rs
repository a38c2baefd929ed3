use yew::prelude::*;

use super::modal::Modal;
use crate::hooks::use_modals::QuickAction;

#[derive(Properties, PartialEq)]
pub struct QuickAddModalProps {
    pub on_action: Callback<QuickAction>,
    pub on_close: Callback<()>,
}

#[function_component(QuickAddModal)]
pub fn quick_add_modal(props: &QuickAddModalProps) -> Html {
    let entry = |action: QuickAction, icon: &'static str, label: &'static str| {
        let on_action = props.on_action.clone();
        let onclick = Callback::from(move |_: MouseEvent| on_action.emit(action));
        html! {
            <button type="button" class="quick-option" {onclick}>
                <i class={icon}></i>
                <span>{label}</span>
            </button>
        }
    };

    html! {
        <Modal id="quick-add-modal" title="Quick add" on_close={props.on_close.clone()}>
            <div class="quick-options">
                { entry(QuickAction::Customer, "fas fa-user-plus", "New customer") }
                { entry(QuickAction::Supplier, "fas fa-truck", "New supplier") }
                { entry(QuickAction::Debt, "fas fa-hand-holding-usd", "New debt") }
                { entry(QuickAction::Payment, "fas fa-money-bill-wave", "New payment") }
            </div>
        </Modal>
    }
}
