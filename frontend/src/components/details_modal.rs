use shared::{format_amount, DebtType, Party, PartyKind, Transaction};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::modal::Modal;
use crate::hooks::use_modals::DebtTarget;
use crate::services::api::ApiClient;
use crate::services::date_utils::format_timestamp;
use crate::services::logging::Logger;

#[derive(Properties, PartialEq)]
pub struct DetailsModalProps {
    pub kind: PartyKind,
    pub id: u64,
    pub api_client: ApiClient,
    pub currency: AttrValue,
    pub balances_hidden: bool,
    pub on_close: Callback<()>,
    pub on_add_debt: Callback<DebtTarget>,
}

#[derive(Clone, PartialEq)]
enum Details {
    Loading,
    Loaded { party: Party, transactions: Vec<Transaction> },
    Missing(String),
}

/// Read-only view of one party and its transaction history
#[function_component(DetailsModal)]
pub fn details_modal(props: &DetailsModalProps) -> Html {
    let details = use_state(|| Details::Loading);

    {
        let details = details.clone();
        let api_client = props.api_client.clone();
        use_effect_with((props.kind, props.id), move |(kind, id)| {
            let (kind, id) = (*kind, *id);
            spawn_local(async move {
                let loaded = match api_client.get_party(kind, id).await {
                    Ok(response) => match (response.success, response.party) {
                        (true, Some(party)) => Details::Loaded { party, transactions: response.transactions },
                        _ => Details::Missing(response.message.unwrap_or_else(|| format!("{} not found", kind.label()))),
                    },
                    Err(e) => {
                        Logger::error_with_component("details-modal", &e);
                        Details::Missing("Connection error".to_string())
                    }
                };
                details.set(loaded);
            });
            || ()
        });
    }

    let hidden = props.balances_hidden.then_some("balance-hidden");

    let body = match &*details {
        Details::Loading => html! { <p class="muted">{"Loading..."}</p> },
        Details::Missing(message) => html! { <p class="error-message">{message.clone()}</p> },
        Details::Loaded { party, transactions } => {
            let on_add_debt = {
                let on_add_debt = props.on_add_debt.clone();
                let target = DebtTarget::from((props.kind, party));
                Callback::from(move |_: MouseEvent| on_add_debt.emit(target.clone()))
            };

            html! {
                <>
                    <dl class="details-grid">
                        <dt>{"Name"}</dt><dd>{party.name.clone()}</dd>
                        <dt>{"Phone"}</dt><dd>{party.phone.clone()}</dd>
                        <dt>{"Category"}</dt><dd>{party.category.clone()}</dd>
                        <dt>{"Balance"}</dt>
                        <dd class={classes!("balance", party.balance_sign().css_class(), hidden)}>
                            {format_amount(party.balance, &props.currency)}
                        </dd>
                        <dt>{"Since"}</dt><dd>{format_timestamp(&party.created_at)}</dd>
                        if !party.notes.is_empty() {
                            <dt>{"Notes"}</dt><dd>{party.notes.clone()}</dd>
                        }
                    </dl>
                    <h4>{"Transactions"}</h4>
                    if transactions.is_empty() {
                        <p class="muted">{"No transactions recorded"}</p>
                    } else {
                        <table class="data-table compact">
                            <thead>
                                <tr><th>{"Date"}</th><th>{"Type"}</th><th>{"Amount"}</th><th>{"Notes"}</th></tr>
                            </thead>
                            <tbody>
                                { for transactions.iter().rev().map(|t| html! {
                                    <tr key={t.id}>
                                        <td>{t.date.clone()}</td>
                                        <td>{if t.debt_type == DebtType::Taken { "Debt" } else { "Payment" }}</td>
                                        <td class={classes!(if t.debt_type == DebtType::Taken { "positive" } else { "negative" }, hidden)}>
                                            {format_amount(t.amount, &props.currency)}
                                        </td>
                                        <td>{t.notes.clone()}</td>
                                    </tr>
                                }) }
                            </tbody>
                        </table>
                    }
                    <div class="modal-actions">
                        <button type="button" class="btn btn-primary" onclick={on_add_debt}>
                            <i class="fas fa-plus-circle"></i>{" Add debt"}
                        </button>
                    </div>
                </>
            }
        }
    };

    html! {
        <Modal id="details-modal" title={format!("{} details", props.kind.label())} on_close={props.on_close.clone()}>
            {body}
        </Modal>
    }
}
