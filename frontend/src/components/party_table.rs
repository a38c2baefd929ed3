use shared::{format_amount, Party, PartyKind};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PartyTableProps {
    pub kind: PartyKind,
    /// Rows left after filtering
    pub parties: Vec<Party>,
    pub filtered: bool,
    pub loading: bool,
    pub currency: AttrValue,
    pub balances_hidden: bool,
    pub on_view: Callback<Party>,
    pub on_add_debt: Callback<Party>,
    pub on_edit: Callback<Party>,
    pub on_delete: Callback<Party>,
}

#[function_component(PartyTable)]
pub fn party_table(props: &PartyTableProps) -> Html {
    let action = |party: &Party, callback: &Callback<Party>, icon: &'static str, title: &'static str, class: &'static str| {
        let party = party.clone();
        let callback = callback.clone();
        let onclick = Callback::from(move |_: MouseEvent| callback.emit(party.clone()));
        html! {
            <button type="button" class={classes!("action-btn", class)} {title} {onclick}>
                <i class={icon}></i>
            </button>
        }
    };

    let body = if props.parties.is_empty() {
        let message = if props.loading {
            "Loading...".to_string()
        } else if props.filtered {
            format!("No {} match the filters", props.kind.plural())
        } else {
            format!("No {} yet", props.kind.plural())
        };
        html! {
            <tr class="empty-row"><td colspan="5">{message}</td></tr>
        }
    } else {
        props
            .parties
            .iter()
            .map(|party| {
                let balance_class = classes!(
                    "balance",
                    party.balance_sign().css_class(),
                    props.balances_hidden.then_some("balance-hidden"),
                );
                html! {
                    <tr key={party.id}>
                        <td class="party-name">{party.name.clone()}</td>
                        <td>{party.phone.clone()}</td>
                        <td>
                            if !party.category.is_empty() {
                                <span class="category-badge">{party.category.clone()}</span>
                            }
                        </td>
                        <td class={balance_class}>{format_amount(party.balance, &props.currency)}</td>
                        <td class="actions">
                            { action(party, &props.on_view, "fas fa-eye", "View", "view") }
                            { action(party, &props.on_add_debt, "fas fa-plus-circle", "Add debt", "debt") }
                            { action(party, &props.on_edit, "fas fa-edit", "Edit", "edit") }
                            { action(party, &props.on_delete, "fas fa-trash", "Delete", "delete") }
                        </td>
                    </tr>
                }
            })
            .collect::<Html>()
    };

    html! {
        <div class="table-container">
            <table id="customers-table" class="data-table">
                <thead>
                    <tr>
                        <th>{"Name"}</th>
                        <th>{"Phone"}</th>
                        <th>{"Category"}</th>
                        <th>{"Balance"}</th>
                        <th>{"Actions"}</th>
                    </tr>
                </thead>
                <tbody>
                    {body}
                </tbody>
            </table>
        </div>
    }
}
