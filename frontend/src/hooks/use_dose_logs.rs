use std::rc::Rc;

use shared::{DoseLogEntry, DoseLogTable, FilterCriteria, PageDirection, RequestSequencer};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::api::ApiClient;
use crate::services::logging::Logger;

pub enum DoseLogAction {
    FetchStarted,
    Loaded { sequence: u64, logs: Vec<DoseLogEntry> },
    FetchFailed,
    ApplyFilters(FilterCriteria),
    ClearFilters,
    SetPageSize(usize),
    GoToPage(PageDirection),
}

#[derive(Clone, Debug, PartialEq)]
pub struct DoseLogState {
    pub table: DoseLogTable,
    pub loading: bool,
}

impl Default for DoseLogState {
    fn default() -> Self {
        Self {
            table: DoseLogTable::new(),
            loading: true,
        }
    }
}

impl Reducible for DoseLogState {
    type Action = DoseLogAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            DoseLogAction::FetchStarted => next.loading = true,
            DoseLogAction::Loaded { sequence, logs } => {
                let count = logs.len();
                if next.table.replace_logs(sequence, logs) {
                    Logger::debug_with_component("dose_logs", &format!("Loaded {} dose log entries", count));
                }
                next.loading = false;
            }
            DoseLogAction::FetchFailed => next.loading = false,
            DoseLogAction::ApplyFilters(criteria) => {
                next.table.apply_filters(criteria);
            }
            DoseLogAction::ClearFilters => next.table.clear_filters(),
            DoseLogAction::SetPageSize(page_size) => next.table.set_page_size(page_size),
            DoseLogAction::GoToPage(direction) => {
                if !next.table.go_to_page(direction) {
                    return self;
                }
            }
        }
        Rc::new(next)
    }
}

pub struct UseDoseLogsResult {
    pub state: DoseLogState,
    pub actions: UseDoseLogsActions,
}

#[derive(Clone, PartialEq)]
pub struct UseDoseLogsActions {
    pub refresh: Callback<()>,
    pub apply_filters: Callback<FilterCriteria>,
    pub clear_filters: Callback<()>,
    pub set_page_size: Callback<usize>,
    pub go_to_page: Callback<PageDirection>,
}

#[hook]
pub fn use_dose_logs(api_client: &ApiClient) -> UseDoseLogsResult {
    let state = use_reducer(DoseLogState::default);
    let sequencer = use_mut_ref(RequestSequencer::new);

    let refresh = {
        let dispatcher = state.dispatcher();
        use_callback(api_client.clone(), move |_, api_client| {
            let api_client = api_client.clone();
            let dispatcher = dispatcher.clone();
            let sequence = sequencer.borrow_mut().next();

            dispatcher.dispatch(DoseLogAction::FetchStarted);
            spawn_local(async move {
                match api_client.fetch_dose_logs().await {
                    Ok(logs) => dispatcher.dispatch(DoseLogAction::Loaded { sequence, logs }),
                    Err(e) => {
                        Logger::error_with_component("dose_logs", &format!("Failed to fetch dose logs: {}", e));
                        dispatcher.dispatch(DoseLogAction::FetchFailed);
                    }
                }
            });
        })
    };

    // Initial load
    use_effect_with((), {
        let refresh = refresh.clone();
        move |_| {
            refresh.emit(());
            || ()
        }
    });

    let apply_filters = {
        let dispatcher = state.dispatcher();
        use_callback((), move |criteria: FilterCriteria, _| {
            dispatcher.dispatch(DoseLogAction::ApplyFilters(criteria));
        })
    };

    let clear_filters = {
        let dispatcher = state.dispatcher();
        use_callback((), move |_, _| dispatcher.dispatch(DoseLogAction::ClearFilters))
    };

    let set_page_size = {
        let dispatcher = state.dispatcher();
        use_callback((), move |page_size: usize, _| {
            dispatcher.dispatch(DoseLogAction::SetPageSize(page_size));
        })
    };

    let go_to_page = {
        let dispatcher = state.dispatcher();
        use_callback((), move |direction: PageDirection, _| {
            dispatcher.dispatch(DoseLogAction::GoToPage(direction));
        })
    };

    UseDoseLogsResult {
        state: (*state).clone(),
        actions: UseDoseLogsActions {
            refresh,
            apply_filters,
            clear_filters,
            set_page_size,
            go_to_page,
        },
    }
}
