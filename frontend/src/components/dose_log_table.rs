use shared::display::EMPTY_STATE_TEXT;
use shared::{DoseLogEntry, LogRow};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct DoseLogTableProps {
    /// Entries on the current page
    pub logs: Vec<DoseLogEntry>,
    pub loading: bool,
}

#[function_component(DoseLogTable)]
pub fn dose_log_table(props: &DoseLogTableProps) -> Html {
    let body = if props.loading && props.logs.is_empty() {
        html! {
            <tr>
                <td colspan="5" class="loading">{"Loading dose history..."}</td>
            </tr>
        }
    } else if props.logs.is_empty() {
        html! {
            <tr>
                <td colspan="5" class="empty-state">
                    <div class="empty-state-icon">{"📭"}</div>
                    <div class="empty-state-text">{EMPTY_STATE_TEXT}</div>
                </td>
            </tr>
        }
    } else {
        html! {
            {for props.logs.iter().map(LogRow::from_entry).map(|row| html! {
                <tr>
                    <td>{row.date}</td>
                    <td>{format!("{} {}", row.meal_icon, row.meal)}</td>
                    <td>{row.timing}</td>
                    <td style="text-align: left;">{row.scheduled_time}</td>
                    <td>
                        <span class={row.status.kind.css_class()}>{row.status.label}</span>
                    </td>
                </tr>
            })}
        }
    };

    html! {
        <div class="table-container">
            <table id="logTable" class="log-table">
                <thead>
                    <tr>
                        <th>{"Date"}</th>
                        <th>{"Meal"}</th>
                        <th>{"Timing"}</th>
                        <th>{"Scheduled Time"}</th>
                        <th>{"Status"}</th>
                    </tr>
                </thead>
                <tbody>
                    {body}
                </tbody>
            </table>
        </div>
    }
}
