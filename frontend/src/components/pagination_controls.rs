use shared::dose_log_table::PAGE_SIZE_OPTIONS;
use shared::PageDirection;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PaginationControlsProps {
    pub summary: String,
    pub page_size: usize,
    pub has_prev: bool,
    pub has_next: bool,
    pub on_page: Callback<PageDirection>,
    pub on_page_size: Callback<usize>,
}

#[function_component(PaginationControls)]
pub fn pagination_controls(props: &PaginationControlsProps) -> Html {
    let on_prev = {
        let on_page = props.on_page.clone();
        Callback::from(move |_: MouseEvent| on_page.emit(PageDirection::Prev))
    };

    let on_next = {
        let on_page = props.on_page.clone();
        Callback::from(move |_: MouseEvent| on_page.emit(PageDirection::Next))
    };

    let on_rows = {
        let on_page_size = props.on_page_size.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            // Unparseable values fall back to the table's default size
            on_page_size.emit(select.value().parse().unwrap_or(0));
        })
    };

    html! {
        <div class="pagination">
            <label for="rowsPerPage">{"Rows per page"}</label>
            <select id="rowsPerPage" onchange={on_rows}>
                {for PAGE_SIZE_OPTIONS.iter().map(|size| html! {
                    <option value={size.to_string()} selected={*size == props.page_size}>{size.to_string()}</option>
                })}
            </select>

            <button id="prevPageButton" type="button" disabled={!props.has_prev} onclick={on_prev}>
                {"‹ Prev"}
            </button>
            <span id="paginationInfo">{&props.summary}</span>
            <button id="nextPageButton" type="button" disabled={!props.has_next} onclick={on_next}>
                {"Next ›"}
            </button>
        </div>
    }
}
