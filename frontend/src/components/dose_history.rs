use yew::prelude::*;

use super::dose_log_table::DoseLogTable;
use super::filter_panel::FilterPanel;
use super::pagination_controls::PaginationControls;
use crate::hooks::use_dose_logs::{use_dose_logs, UseDoseLogsResult};
use crate::services::api::ApiClient;

#[derive(Properties, PartialEq)]
pub struct DoseHistoryProps {
    pub api_client: ApiClient,
}

/// Dose history: filter panel, paginated table and page controls
#[function_component(DoseHistory)]
pub fn dose_history(props: &DoseHistoryProps) -> Html {
    let UseDoseLogsResult { state, actions } = use_dose_logs(&props.api_client);
    let filters_open = use_state(|| false);

    let on_toggle_filters = {
        let filters_open = filters_open.clone();
        Callback::from(move |_: MouseEvent| filters_open.set(!*filters_open))
    };

    let on_refresh = {
        let refresh = actions.refresh.clone();
        Callback::from(move |_: MouseEvent| refresh.emit(()))
    };

    let table = &state.table;

    html! {
        <section id="history" class="history-section">
            <div class="history-header">
                <h2>{"Dose History"}</h2>
                <div class="history-actions">
                    <button type="button" class="filter-toggle-btn" onclick={on_toggle_filters}>
                        {if *filters_open { "Hide Filters" } else { "Filters" }}
                    </button>
                    <button type="button" class="refresh-btn" disabled={state.loading} onclick={on_refresh}>
                        {"Refresh"}
                    </button>
                </div>
            </div>

            <FilterPanel
                open={*filters_open}
                criteria={table.criteria().clone()}
                on_apply={actions.apply_filters.clone()}
                on_clear={actions.clear_filters.clone()}
            />

            <DoseLogTable logs={table.current_page_slice().to_vec()} loading={state.loading} />

            <PaginationControls
                summary={table.summary()}
                page_size={table.page_size()}
                has_prev={table.has_prev()}
                has_next={table.has_next()}
                on_page={actions.go_to_page.clone()}
                on_page_size={actions.set_page_size.clone()}
            />
        </section>
    }
}
