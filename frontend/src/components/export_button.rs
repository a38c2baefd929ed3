use shared::PartyKind;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::hooks::use_notifications::use_notifier;
use crate::services::api::ApiClient;
use crate::services::export::{export_report, EXPORT_FAILURE_MESSAGE, EXPORT_SUCCESS_MESSAGE};
use crate::services::logging::Logger;

#[derive(Properties, PartialEq)]
pub struct ExportButtonProps {
    pub kind: PartyKind,
    pub api_client: ApiClient,
}

/// Downloads the PDF report of the current tab
#[function_component(ExportButton)]
pub fn export_button(props: &ExportButtonProps) -> Html {
    let exporting = use_state(|| false);
    let notifier = use_notifier();

    let onclick = {
        let exporting = exporting.clone();
        let kind = props.kind;
        let api_client = props.api_client.clone();

        Callback::from(move |_: MouseEvent| {
            if *exporting {
                return;
            }
            exporting.set(true);

            let exporting = exporting.clone();
            let notifier = notifier.clone();
            let api_client = api_client.clone();
            spawn_local(async move {
                match export_report(&api_client, kind).await {
                    Ok(()) => notifier.success(EXPORT_SUCCESS_MESSAGE),
                    Err(e) => {
                        Logger::error_with_component("export", &e);
                        notifier.error(EXPORT_FAILURE_MESSAGE);
                    }
                }
                exporting.set(false);
            });
        })
    };

    html! {
        <button
            id={format!("export-{}", props.kind.plural())}
            type="button"
            class="btn btn-secondary"
            disabled={*exporting}
            {onclick}
        >
            <i class="fas fa-file-pdf"></i>{" Export PDF"}
        </button>
    }
}
