use shared::{DoseStatus, FilterCriteria, Meal, Timing};
use std::rc::Rc;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FilterPanelProps {
    pub open: bool,
    /// Criteria currently applied to the table
    pub criteria: FilterCriteria,
    pub on_apply: Callback<FilterCriteria>,
    pub on_clear: Callback<()>,
}

fn checkbox_id(prefix: &str, label: &str) -> String {
    format!("filter{}{}", prefix, label)
}

pub enum DraftAction {
    Replace(FilterCriteria),
    Clear,
}

/// Criteria edited in the panel but not yet applied
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterDraft {
    pub criteria: FilterCriteria,
}

impl Reducible for FilterDraft {
    type Action = DraftAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let criteria = match action {
            DraftAction::Replace(criteria) => criteria,
            DraftAction::Clear => FilterCriteria::default(),
        };
        if criteria == self.criteria {
            return self;
        }
        Rc::new(FilterDraft { criteria })
    }
}

/// Change handler that edits the not-yet-applied criteria
fn edit_draft<F>(draft: UseReducerHandle<FilterDraft>, edit: F) -> Callback<Event>
where
    F: Fn(&mut FilterCriteria, &HtmlInputElement) + 'static,
{
    Callback::from(move |e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let mut next = draft.criteria.clone();
        edit(&mut next, &input);
        draft.dispatch(DraftAction::Replace(next));
    })
}

#[function_component(FilterPanel)]
pub fn filter_panel(props: &FilterPanelProps) -> Html {
    let draft = use_reducer({
        let criteria = props.criteria.clone();
        move || FilterDraft { criteria }
    });

    // Follow the applied criteria when they change underneath us (reload)
    {
        let draft = draft.clone();
        use_effect_with(props.criteria.clone(), move |criteria| {
            draft.dispatch(DraftAction::Replace(criteria.clone()));
            || ()
        });
    }

    let on_from = edit_draft(draft.clone(), |c, input| c.date_from = input.value());
    let on_to = edit_draft(draft.clone(), |c, input| c.date_to = input.value());

    let on_apply = {
        let draft = draft.clone();
        let on_apply = props.on_apply.clone();
        Callback::from(move |_: MouseEvent| on_apply.emit(draft.criteria.clone()))
    };

    // The applied criteria may already be the defaults, so the effect above
    // would not fire. Reset the inputs here.
    let on_clear = {
        let draft = draft.clone();
        let on_clear = props.on_clear.clone();
        Callback::from(move |_: MouseEvent| {
            draft.dispatch(DraftAction::Clear);
            on_clear.emit(());
        })
    };

    let checkbox = |id: String, label: &'static str, checked: bool, onchange: Callback<Event>| {
        html! {
            <label class="filter-checkbox" for={id.clone()}>
                <input type="checkbox" id={id} checked={checked} {onchange} />
                {label}
            </label>
        }
    };

    let panel_class = classes!("filter-panel", props.open.then_some("active"));

    html! {
        <div id="filterPanel" class={panel_class}>
            <div class="filter-group">
                <h4>{"Date range"}</h4>
                <label for="filterDateFrom">{"From"}</label>
                <input type="date" id="filterDateFrom" value={draft.criteria.date_from.clone()} onchange={on_from} />
                <label for="filterDateTo">{"To"}</label>
                <input type="date" id="filterDateTo" value={draft.criteria.date_to.clone()} onchange={on_to} />
            </div>

            <div class="filter-group">
                <h4>{"Meal"}</h4>
                {for Meal::ALL.iter().map(|meal| {
                    let meal = *meal;
                    checkbox(
                        checkbox_id("Meal", meal.label()),
                        meal.label(),
                        draft.criteria.meal_enabled(meal),
                        edit_draft(draft.clone(), move |c, input| c.set_meal(meal, input.checked())),
                    )
                })}
            </div>

            <div class="filter-group">
                <h4>{"Timing"}</h4>
                {for Timing::ALL.iter().map(|timing| {
                    let timing = *timing;
                    checkbox(
                        checkbox_id("Timing", timing.label()),
                        timing.label(),
                        draft.criteria.timing_enabled(timing),
                        edit_draft(draft.clone(), move |c, input| c.set_timing(timing, input.checked())),
                    )
                })}
            </div>

            <div class="filter-group">
                <h4>{"Status"}</h4>
                {for DoseStatus::ALL.iter().map(|status| {
                    let status = *status;
                    checkbox(
                        checkbox_id("Status", status.label()),
                        status.label(),
                        draft.criteria.status_enabled(status),
                        edit_draft(draft.clone(), move |c, input| c.set_status(status, input.checked())),
                    )
                })}
            </div>

            <div class="filter-actions">
                <button type="button" class="filter-apply-btn" onclick={on_apply}>{"Apply Filters"}</button>
                <button type="button" class="filter-clear-btn" onclick={on_clear}>{"Clear"}</button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn edited() -> FilterCriteria {
        FilterCriteria {
            date_from: "2025-06-01".to_string(),
            morning: false,
            ..FilterCriteria::default()
        }
    }

    #[wasm_bindgen_test]
    fn test_clear_resets_unapplied_edits() {
        let draft = Rc::new(FilterDraft::default())
            .reduce(DraftAction::Replace(edited()))
            .reduce(DraftAction::Clear);
        assert_eq!(draft.criteria, FilterCriteria::default());
    }

    #[wasm_bindgen_test]
    fn test_replace_with_same_criteria_is_noop() {
        let draft = Rc::new(FilterDraft { criteria: edited() });
        let same = draft.clone().reduce(DraftAction::Replace(edited()));
        assert!(Rc::ptr_eq(&draft, &same));
    }
}
