use shared::DebtType;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use super::modal::Modal;
use crate::hooks::use_modals::{debt_modal_title, DebtTarget};
use crate::hooks::use_notifications::use_notifier;
use crate::services::api::ApiClient;
use crate::services::date_utils::get_current_date;
use crate::services::forms::{build_debt_draft, DebtForm, SubmitMessages, SubmitOutcome};
use crate::services::logging::Logger;

#[derive(Properties, PartialEq)]
pub struct DebtModalProps {
    pub target: DebtTarget,
    pub api_client: ApiClient,
    pub on_close: Callback<()>,
    pub on_saved: Callback<()>,
}

/// Record a debt or a payment against `target`; the form starts blank and dated today
#[function_component(DebtModal)]
pub fn debt_modal(props: &DebtModalProps) -> Html {
    let form = use_state(|| DebtForm::new(get_current_date()));
    let submitting = use_state(|| false);
    let notifier = use_notifier();

    let on_type = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let debt_type = if select.value() == DebtType::Taken.as_str() { DebtType::Taken } else { DebtType::Paid };
            form.set(DebtForm { debt_type, ..(*form).clone() });
        })
    };

    let on_amount = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.set(DebtForm { amount: input.value(), ..(*form).clone() });
        })
    };

    let on_date = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.set(DebtForm { date: input.value(), ..(*form).clone() });
        })
    };

    let on_notes = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            form.set(DebtForm { notes: area.value(), ..(*form).clone() });
        })
    };

    let on_submit = {
        let form = form.clone();
        let submitting = submitting.clone();
        let notifier = notifier.clone();
        let target = props.target.clone();
        let api_client = props.api_client.clone();
        let on_saved = props.on_saved.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *submitting {
                return;
            }

            let draft = match build_debt_draft(Some(&target), &form) {
                Ok(Some(draft)) => draft,
                Ok(None) => return,
                Err(message) => {
                    notifier.error(message);
                    return;
                }
            };
            submitting.set(true);

            let submitting = submitting.clone();
            let notifier = notifier.clone();
            let api_client = api_client.clone();
            let on_saved = on_saved.clone();

            spawn_local(async move {
                let result = api_client.add_transaction(&draft).await;
                let outcome = SubmitOutcome::from_result(result.map(|r| (r.success, r.message)));
                match &outcome {
                    SubmitOutcome::Rejected(message) => Logger::warn_with_component(
                        "debt-modal",
                        &format!("Transaction rejected: {}", message.as_deref().unwrap_or("no reason given")),
                    ),
                    SubmitOutcome::Failed(error) => Logger::error_with_component("debt-modal", error),
                    SubmitOutcome::Saved => {}
                }

                let (text, level) = outcome.notification(&SubmitMessages::add_transaction());
                notifier.notify(text, level);
                submitting.set(false);
                if outcome.is_saved() {
                    on_saved.emit(());
                }
            });
        })
    };

    let on_cancel = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <Modal
            id="add-debt-modal"
            title={debt_modal_title(&props.target)}
            title_id="debt-modal-title"
            on_close={props.on_close.clone()}
        >
            <form class="modal-form" onsubmit={on_submit}>
                <div class="form-group">
                    <label for="debt-type">{"Type"}</label>
                    <select id="debt-type" onchange={on_type}>
                        <option value="taken" selected={form.debt_type == DebtType::Taken}>{"Debt taken"}</option>
                        <option value="paid" selected={form.debt_type == DebtType::Paid}>{"Payment"}</option>
                    </select>
                </div>
                <div class="form-group">
                    <label for="debt-amount">{"Amount"}</label>
                    <input
                        id="debt-amount"
                        type="number"
                        step="0.01"
                        min="0.01"
                        required=true
                        value={form.amount.clone()}
                        oninput={on_amount}
                    />
                </div>
                <div class="form-group">
                    <label for="debt-date">{"Date"}</label>
                    <input id="debt-date" type="date" required=true value={form.date.clone()} onchange={on_date} />
                </div>
                <div class="form-group">
                    <label for="debt-notes">{"Notes"}</label>
                    <textarea id="debt-notes" rows="2" value={form.notes.clone()} oninput={on_notes} />
                </div>
                <div class="modal-actions">
                    <button type="button" class="btn btn-secondary" onclick={on_cancel}>{"Cancel"}</button>
                    <button type="submit" class="btn btn-primary" disabled={*submitting}>
                        {if *submitting { "Saving..." } else { "Save" }}
                    </button>
                </div>
            </form>
        </Modal>
    }
}
