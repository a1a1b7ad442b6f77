use yew::prelude::*;

use crate::hooks::use_toasts::Toast;

#[derive(Properties, PartialEq)]
pub struct ToastHostProps {
    pub toasts: Vec<Toast>,
    pub on_dismiss: Callback<u32>,
}

#[function_component(ToastHost)]
pub fn toast_host(props: &ToastHostProps) -> Html {
    html! {
        <div class="toast-container" aria-live="polite">
            {for props.toasts.iter().map(|toast| {
                let on_close = {
                    let on_dismiss = props.on_dismiss.clone();
                    let id = toast.id;
                    Callback::from(move |_: MouseEvent| on_dismiss.emit(id))
                };
                html! {
                    <div key={toast.id} class={toast.kind.css_class()} role="status">
                        <span class="toast-message">{&toast.message}</span>
                        <button type="button" class="toast-close" aria-label="Close" onclick={on_close}>{"×"}</button>
                    </div>
                }
            })}
        </div>
    }
}
