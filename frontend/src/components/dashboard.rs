use gloo::dialogs::confirm;
use shared::{Party, PartyKind, Settings};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::debt_modal::DebtModal;
use super::details_modal::DetailsModal;
use super::export_button::ExportButton;
use super::filter_bar::FilterBar;
use super::header::Header;
use super::party_modal::PartyModal;
use super::party_table::PartyTable;
use super::party_tabs::PartyTabs;
use super::quick_add_modal::QuickAddModal;
use super::stats_strip::StatsStrip;
use crate::hooks::use_modals::{use_modals, DebtTarget, ModalState, QuickAction, QuickActionResult};
use crate::hooks::use_notifications::use_notifier;
use crate::hooks::use_parties::use_parties;
use crate::hooks::use_theme::use_theme;
use crate::services::api::ApiClient;
use crate::services::customer_filter::{filter_parties, TableFilter};
use crate::services::forms::{delete_confirmation, SubmitMessages, SubmitOutcome};
use crate::services::logging::Logger;

/// The single page: header, stats, the party table of the selected tab and its modals
#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    let api_client = use_memo((), |_| ApiClient::from_build_env());
    let api_client = (*api_client).clone();
    let settings = use_memo((), |_| Settings::default());

    let notifier = use_notifier();
    let theme = use_theme();
    let modals = use_modals();
    let kind = use_state(|| PartyKind::Customer);
    let filter = use_state(TableFilter::default);
    let balances_hidden = use_state(|| false);
    let parties = use_parties(&api_client, *kind);

    let on_select_kind = {
        let kind = kind.clone();
        let filter = filter.clone();
        Callback::from(move |selected: PartyKind| {
            if *kind != selected {
                // Categories differ per kind, so old filters would not apply
                filter.set(TableFilter::default());
                kind.set(selected);
            }
        })
    };

    let on_filter_change = {
        let filter = filter.clone();
        Callback::from(move |next: TableFilter| filter.set(next))
    };

    let on_toggle_balances = {
        let balances_hidden = balances_hidden.clone();
        Callback::from(move |_| balances_hidden.set(!*balances_hidden))
    };

    let on_saved = {
        let modals = modals.clone();
        let schedule_refresh = parties.schedule_refresh.clone();
        Callback::from(move |_| {
            modals.close_all();
            schedule_refresh.emit(());
        })
    };

    let on_quick_action = {
        let modals = modals.clone();
        let notifier = notifier.clone();
        Callback::from(move |action: QuickAction| {
            modals.close_all();
            match action.resolve() {
                QuickActionResult::Open(modal) => modals.open(modal),
                QuickActionResult::Hint(message) => notifier.info(message),
            }
        })
    };

    let on_view = {
        let open = modals.open_callback();
        let kind = *kind;
        Callback::from(move |party: Party| open.emit(ModalState::Details { kind, id: party.id }))
    };

    let on_add_debt = {
        let open = modals.open_callback();
        let kind = *kind;
        Callback::from(move |party: Party| {
            open.emit(ModalState::AddDebt { target: DebtTarget::from((kind, &party)) })
        })
    };

    let on_debt_from_details = {
        let open = modals.open_callback();
        Callback::from(move |target: DebtTarget| open.emit(ModalState::AddDebt { target }))
    };

    let on_edit = {
        let open = modals.open_callback();
        let kind = *kind;
        Callback::from(move |party: Party| open.emit(ModalState::EditParty { kind, party }))
    };

    let on_delete = {
        let api_client = api_client.clone();
        let notifier = notifier.clone();
        let schedule_refresh = parties.schedule_refresh.clone();
        let kind = *kind;
        Callback::from(move |party: Party| {
            if !confirm(&delete_confirmation(kind)) {
                return;
            }

            let api_client = api_client.clone();
            let notifier = notifier.clone();
            let schedule_refresh = schedule_refresh.clone();
            spawn_local(async move {
                let result = api_client.delete_party(kind, party.id).await;
                let outcome = SubmitOutcome::from_result(result.map(|r| (r.success, r.message)));
                if let SubmitOutcome::Failed(error) = &outcome {
                    Logger::error_with_component("dashboard", error);
                }

                let (text, level) = outcome.notification(&SubmitMessages::delete_party(kind));
                notifier.notify(text, level);
                if outcome.is_saved() {
                    schedule_refresh.emit(());
                }
            });
        })
    };

    let on_add_party = {
        let open = modals.open_callback();
        let kind = *kind;
        Callback::from(move |_: MouseEvent| open.emit(ModalState::AddParty { kind }))
    };

    let on_quick_add = {
        let open = modals.open_callback();
        Callback::from(move |_| open.emit(ModalState::QuickAdd))
    };

    let close = modals.close_callback();
    let currency: AttrValue = settings.currency.clone().into();
    let visible: Vec<Party> = filter_parties(&parties.state.parties, &filter).into_iter().cloned().collect();

    let modal = match modals.current() {
        ModalState::Closed => html! {},
        ModalState::AddParty { kind } => html! {
            <PartyModal
                kind={*kind}
                categories={parties.state.categories.clone()}
                api_client={api_client.clone()}
                on_close={close.clone()}
                on_saved={on_saved.clone()}
            />
        },
        ModalState::EditParty { kind, party } => html! {
            <PartyModal
                kind={*kind}
                existing={party.clone()}
                categories={parties.state.categories.clone()}
                api_client={api_client.clone()}
                on_close={close.clone()}
                on_saved={on_saved.clone()}
            />
        },
        ModalState::AddDebt { target } => html! {
            <DebtModal
                key={format!("{}-{}", target.kind, target.id)}
                target={target.clone()}
                api_client={api_client.clone()}
                on_close={close.clone()}
                on_saved={on_saved.clone()}
            />
        },
        ModalState::QuickAdd => html! {
            <QuickAddModal on_action={on_quick_action} on_close={close.clone()} />
        },
        ModalState::Details { kind, id } => html! {
            <DetailsModal
                kind={*kind}
                id={*id}
                api_client={api_client.clone()}
                currency={currency.clone()}
                balances_hidden={*balances_hidden}
                on_close={close.clone()}
                on_add_debt={on_debt_from_details}
            />
        },
    };

    html! {
        <div class="app">
            <Header
                shop_name={settings.shop_name.clone()}
                theme={theme.theme}
                on_toggle_theme={theme.toggle.clone()}
                balances_hidden={*balances_hidden}
                {on_toggle_balances}
                {on_quick_add}
            />
            <main class="container">
                <StatsStrip
                    stats={parties.state.stats.clone()}
                    currency={currency.clone()}
                    balances_hidden={*balances_hidden}
                />
                <PartyTabs selected={*kind} on_select={on_select_kind} />
                <section class="card">
                    <div class="card-header">
                        <h2>{kind.label()}{"s"}</h2>
                        <div class="card-actions">
                            <ExportButton kind={*kind} api_client={api_client.clone()} />
                            <button type="button" class="btn btn-primary" onclick={on_add_party}>
                                <i class="fas fa-plus"></i>{format!(" Add {}", kind.label())}
                            </button>
                        </div>
                    </div>
                    <FilterBar
                        filter={(*filter).clone()}
                        categories={parties.state.categories.clone()}
                        on_change={on_filter_change}
                    />
                    <PartyTable
                        kind={*kind}
                        parties={visible}
                        filtered={!filter.is_empty()}
                        loading={parties.state.loading}
                        currency={currency.clone()}
                        balances_hidden={*balances_hidden}
                        {on_view}
                        {on_add_debt}
                        {on_edit}
                        {on_delete}
                    />
                </section>
            </main>
            {modal}
        </div>
    }
}
