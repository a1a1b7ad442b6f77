use std::cell::Cell;
use std::rc::Rc;

use gloo::timers::callback::Timeout;
use yew::prelude::*;

use crate::services::notifications::{Notifier, ToastKind, ToastMessage, TOAST_DURATION_MS};

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub message: String,
    pub kind: ToastKind,
}

pub enum ToastAction {
    Push(Toast),
    Dismiss(u32),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastList {
    pub toasts: Vec<Toast>,
}

impl Reducible for ToastList {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut toasts = self.toasts.clone();
        match action {
            ToastAction::Push(toast) => toasts.push(toast),
            ToastAction::Dismiss(id) => {
                if !toasts.iter().any(|t| t.id == id) {
                    return self;
                }
                toasts.retain(|t| t.id != id);
            }
        }
        Rc::new(Self { toasts })
    }
}

pub struct UseToastsResult {
    pub notifier: Notifier,
    pub toasts: Vec<Toast>,
    pub dismiss: Callback<u32>,
}

/// Toast queue for the page. The returned `Notifier` is meant to be provided as context.
#[hook]
pub fn use_toasts() -> UseToastsResult {
    let list = use_reducer(ToastList::default);

    let notifier = {
        let dispatcher = list.dispatcher();
        use_memo((), move |_| {
            let next_id = Rc::new(Cell::new(0u32));
            Notifier::with_host(Callback::from(move |toast: ToastMessage| {
                let id = next_id.get();
                next_id.set(id.wrapping_add(1));

                dispatcher.dispatch(ToastAction::Push(Toast {
                    id,
                    message: toast.message,
                    kind: toast.kind,
                }));

                let dispatcher = dispatcher.clone();
                Timeout::new(TOAST_DURATION_MS, move || {
                    dispatcher.dispatch(ToastAction::Dismiss(id));
                })
                .forget();
            }))
        })
    };

    let dismiss = {
        let dispatcher = list.dispatcher();
        use_callback((), move |id: u32, _| dispatcher.dispatch(ToastAction::Dismiss(id)))
    };

    UseToastsResult {
        notifier: (*notifier).clone(),
        toasts: list.toasts.clone(),
        dismiss,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn toast(id: u32) -> Toast {
        Toast {
            id,
            message: format!("message {}", id),
            kind: ToastKind::Info,
        }
    }

    #[wasm_bindgen_test]
    fn test_push_and_dismiss() {
        let list = Rc::new(ToastList::default())
            .reduce(ToastAction::Push(toast(0)))
            .reduce(ToastAction::Push(toast(1)))
            .reduce(ToastAction::Dismiss(0));
        assert_eq!(list.toasts, vec![toast(1)]);
    }

    #[wasm_bindgen_test]
    fn test_dismiss_unknown_id_is_noop() {
        let list = Rc::new(ToastList::default()).reduce(ToastAction::Push(toast(3)));
        let same = list.clone().reduce(ToastAction::Dismiss(9));
        assert!(Rc::ptr_eq(&list, &same));
    }
}
