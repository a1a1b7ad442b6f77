use web_sys::{ScrollBehavior, ScrollToOptions};
use yew::prelude::*;

/// Height of the fixed navbar, subtracted when scrolling to a section
const NAVBAR_HEIGHT: f64 = 70.0;

const SECTIONS: [(&str, &str); 2] = [("schedule", "Schedule"), ("history", "History")];

/// Smooth-scroll so that the section starts just below the navbar
pub fn scroll_to_section(section_id: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(section) = window.document().and_then(|d| d.get_element_by_id(section_id)) else {
        return;
    };

    let page_offset = window.page_y_offset().unwrap_or(0.0);
    let top = section.get_bounding_client_rect().top() + page_offset - NAVBAR_HEIGHT;

    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

#[function_component(Navbar)]
pub fn navbar() -> Html {
    html! {
        <nav class="navbar">
            <div class="container">
                <span class="navbar-brand">{"💊 Dose Reminder"}</span>
                <div class="navbar-links">
                    {for SECTIONS.iter().map(|(id, label)| {
                        let id = *id;
                        let onclick = Callback::from(move |_: MouseEvent| scroll_to_section(id));
                        html! {
                            <button type="button" class="nav-link" {onclick}>{*label}</button>
                        }
                    })}
                </div>
            </div>
        </nav>
    }
}
