use shared::{Party, PartyDraft, PartyKind};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use super::modal::Modal;
use crate::hooks::use_notifications::use_notifier;
use crate::services::api::ApiClient;
use crate::services::forms::{SubmitMessages, SubmitOutcome};
use crate::services::logging::Logger;

#[derive(Properties, PartialEq)]
pub struct PartyModalProps {
    pub kind: PartyKind,
    /// Party being edited; `None` adds a new one
    #[prop_or_default]
    pub existing: Option<Party>,
    pub categories: Vec<String>,
    pub api_client: ApiClient,
    pub on_close: Callback<()>,
    pub on_saved: Callback<()>,
}

/// Add/edit form for a customer or supplier. Mounted fresh on every open, so
/// the form always starts from the party (or blank).
#[function_component(PartyModal)]
pub fn party_modal(props: &PartyModalProps) -> Html {
    let draft = {
        let existing = props.existing.clone();
        let first_category = props.categories.first().cloned().unwrap_or_default();
        use_state(move || match existing {
            Some(party) => PartyDraft::from(&party),
            None => PartyDraft { category: first_category, ..Default::default() },
        })
    };
    let submitting = use_state(|| false);
    let notifier = use_notifier();

    let on_name = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            draft.set(PartyDraft { name: input.value(), ..(*draft).clone() });
        })
    };

    let on_phone = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            draft.set(PartyDraft { phone: input.value(), ..(*draft).clone() });
        })
    };

    let on_category = {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            draft.set(PartyDraft { category: select.value(), ..(*draft).clone() });
        })
    };

    let on_notes = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            draft.set(PartyDraft { notes: area.value(), ..(*draft).clone() });
        })
    };

    let on_submit = {
        let draft = draft.clone();
        let submitting = submitting.clone();
        let notifier = notifier.clone();
        let kind = props.kind;
        let existing_id = props.existing.as_ref().map(|party| party.id);
        let api_client = props.api_client.clone();
        let on_saved = props.on_saved.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *submitting {
                return;
            }
            submitting.set(true);

            let request = (*draft).clone();
            let submitting = submitting.clone();
            let notifier = notifier.clone();
            let api_client = api_client.clone();
            let on_saved = on_saved.clone();

            spawn_local(async move {
                let (result, messages) = match existing_id {
                    Some(id) => (
                        api_client.update_party(kind, id, &request).await,
                        SubmitMessages::update_party(kind),
                    ),
                    None => (api_client.add_party(kind, &request).await, SubmitMessages::add_party(kind)),
                };

                let outcome = SubmitOutcome::from_result(result.map(|r| (r.success, r.message)));
                match &outcome {
                    SubmitOutcome::Rejected(message) => Logger::warn_with_component(
                        "party-modal",
                        &format!("{} rejected: {}", kind, message.as_deref().unwrap_or("no reason given")),
                    ),
                    SubmitOutcome::Failed(error) => Logger::error_with_component("party-modal", error),
                    SubmitOutcome::Saved => {}
                }

                let (text, level) = outcome.notification(&messages);
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

    let title = match props.existing {
        Some(_) => format!("Edit {}", props.kind),
        None => format!("Add {}", props.kind),
    };

    html! {
        <Modal id="add-customer-modal" {title} on_close={props.on_close.clone()}>
            <form class="modal-form" onsubmit={on_submit}>
                <div class="form-group">
                    <label for="customer-name">{"Name"}</label>
                    <input id="customer-name" type="text" required=true value={draft.name.clone()} oninput={on_name} />
                </div>
                <div class="form-group">
                    <label for="customer-phone">{"Phone"}</label>
                    <input id="customer-phone" type="tel" value={draft.phone.clone()} oninput={on_phone} />
                </div>
                <div class="form-group">
                    <label for="customer-category">{"Category"}</label>
                    <select id="customer-category" onchange={on_category}>
                        { for props.categories.iter().map(|category| html! {
                            <option value={category.clone()} selected={draft.category == *category}>
                                {category.clone()}
                            </option>
                        }) }
                    </select>
                </div>
                <div class="form-group">
                    <label for="customer-notes">{"Notes"}</label>
                    <textarea id="customer-notes" rows="3" value={draft.notes.clone()} oninput={on_notes} />
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
