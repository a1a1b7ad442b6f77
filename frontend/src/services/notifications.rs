use yew::Callback;

/// How long a toast stays on screen
pub const TOAST_DURATION_MS: u32 = 3000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
    Warning,
}

impl ToastKind {
    pub fn css_class(&self) -> &'static str {
        match self {
            ToastKind::Success => "toast toast-success",
            ToastKind::Error => "toast toast-error",
            ToastKind::Info => "toast toast-info",
            ToastKind::Warning => "toast toast-warning",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ToastMessage {
    pub message: String,
    pub kind: ToastKind,
}

/// Best-effort user feedback.
///
/// Messages go to the mounted toast host. Without a host they fall back to a
/// blocking `alert`.
#[derive(Clone, Default, PartialEq)]
pub struct Notifier {
    host: Option<Callback<ToastMessage>>,
}

impl Notifier {
    pub fn with_host(host: Callback<ToastMessage>) -> Self {
        Self { host: Some(host) }
    }

    pub fn show(&self, message: impl Into<String>, kind: ToastKind) {
        let message = message.into();
        match &self.host {
            Some(host) => host.emit(ToastMessage { message, kind }),
            None => gloo::dialogs::alert(&message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_messages_reach_host() {
        let received = Rc::new(RefCell::new(Vec::new()));
        let notifier = {
            let received = received.clone();
            Notifier::with_host(Callback::from(move |toast: ToastMessage| {
                received.borrow_mut().push(toast);
            }))
        };

        notifier.show("Dose times saved successfully", ToastKind::Success);
        notifier.show("Failed to save dose times", ToastKind::Error);

        let received = received.borrow();
        assert_eq!(received.len(), 2);
        assert_eq!(received[0].kind, ToastKind::Success);
        assert_eq!(received[1].message, "Failed to save dose times");
    }
}
