use gloo::timers::future::TimeoutFuture;
use shared::{DashboardStats, Party, PartyKind};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::api::ApiClient;
use crate::services::forms::REFRESH_DELAY_MS;
use crate::services::logging::Logger;

#[derive(Clone, PartialEq)]
pub struct PartiesState {
    pub parties: Vec<Party>,
    pub categories: Vec<String>,
    pub stats: DashboardStats,
    pub loading: bool,
}

/// Rows as fetched, tagged with the kind they were fetched for
#[derive(Debug, Clone, PartialEq)]
pub struct PartyList {
    pub kind: PartyKind,
    pub parties: Vec<Party>,
    pub categories: Vec<String>,
}

impl PartyList {
    pub fn empty(kind: PartyKind) -> Self {
        Self { kind, parties: Vec::new(), categories: Vec::new() }
    }

    /// Rows and categories to show for the selected `kind`.
    ///
    /// Rows of another kind are never handed out: their ids would be sent
    /// to the selected kind's endpoints.
    pub fn for_kind(&self, kind: PartyKind) -> (Vec<Party>, Vec<String>) {
        if self.kind == kind {
            (self.parties.clone(), self.categories.clone())
        } else {
            (Vec::new(), Vec::new())
        }
    }
}

pub struct UsePartiesResult {
    pub state: PartiesState,
    /// Re-fetch after [`REFRESH_DELAY_MS`], once a save has been acknowledged
    pub schedule_refresh: Callback<()>,
}

/// Parties of the selected kind plus the dashboard stats
#[hook]
pub fn use_parties(api_client: &ApiClient, kind: PartyKind) -> UsePartiesResult {
    let listed = use_state(|| PartyList::empty(kind));
    let stats = use_state(DashboardStats::default);
    let loading = use_state(|| true);
    // Kind currently on screen; answers for a tab the user already left are dropped
    let shown_kind = use_mut_ref(|| kind);
    *shown_kind.borrow_mut() = kind;

    let refresh = {
        let api_client = api_client.clone();
        let listed = listed.clone();
        let stats = stats.clone();
        let loading = loading.clone();
        let shown_kind = shown_kind.clone();

        use_callback(kind, move |_, kind| {
            let kind = *kind;
            let api_client = api_client.clone();
            let listed = listed.clone();
            let stats = stats.clone();
            let loading = loading.clone();
            let shown_kind = shown_kind.clone();

            spawn_local(async move {
                loading.set(true);

                match api_client.list_parties(kind).await {
                    Ok(response) if *shown_kind.borrow() == kind => listed.set(PartyList {
                        kind,
                        parties: response.parties,
                        categories: response.categories,
                    }),
                    Ok(_) => {}
                    Err(e) => Logger::error_with_component("parties", &e),
                }

                match api_client.get_stats().await {
                    Ok(response) => stats.set(response),
                    Err(e) => Logger::error_with_component("parties", &e),
                }

                loading.set(false);
            });
        })
    };

    // Initial load and every tab switch
    {
        let refresh = refresh.clone();
        use_effect_with(kind, move |_| {
            refresh.emit(());
            || ()
        });
    }

    let schedule_refresh = use_callback(refresh, |_, refresh| {
        let refresh = refresh.clone();
        spawn_local(async move {
            TimeoutFuture::new(REFRESH_DELAY_MS).await;
            refresh.emit(());
        });
    });

    let (parties, categories) = listed.for_kind(kind);
    UsePartiesResult {
        state: PartiesState {
            parties,
            categories,
            stats: (*stats).clone(),
            // Until the selected kind's rows arrive the table shows the loading row
            loading: *loading || listed.kind != kind,
        },
        schedule_refresh,
    }
}
