use std::rc::Rc;

use shared::{DoseField, ScheduleForm};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::services::api::ApiClient;
use crate::services::logging::Logger;
use crate::services::notifications::{Notifier, ToastKind, ToastMessage};
use crate::services::storage::browser_preferences;

pub const SAVED_MESSAGE: &str = "Dose times saved successfully";
pub const DELETED_MESSAGE: &str = "Dose time deleted successfully";
pub const SAVE_FAILED_MESSAGE: &str = "Failed to save dose times";
pub const SYNC_FAILED_MESSAGE: &str = "Saved on this device, but syncing with the server failed";
pub const LOCAL_FAILED_MESSAGE: &str = "Synced with the server, but saving on this device failed";

/// Which halves of a save went through
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SaveOutcome {
    Synced,
    LocalOnly,
    RemoteOnly,
    Failed,
}

impl SaveOutcome {
    pub fn new(local_ok: bool, remote_ok: bool) -> Self {
        match (local_ok, remote_ok) {
            (true, true) => SaveOutcome::Synced,
            (true, false) => SaveOutcome::LocalOnly,
            (false, true) => SaveOutcome::RemoteOnly,
            (false, false) => SaveOutcome::Failed,
        }
    }

    /// Toast for this outcome. Problems are always reported, success only when announced.
    pub fn feedback(&self, announce: bool, message: &str) -> Option<ToastMessage> {
        let (kind, message) = match self {
            SaveOutcome::Synced if announce => (ToastKind::Success, message),
            SaveOutcome::Synced => return None,
            SaveOutcome::LocalOnly => (ToastKind::Warning, SYNC_FAILED_MESSAGE),
            SaveOutcome::RemoteOnly => (ToastKind::Warning, LOCAL_FAILED_MESSAGE),
            SaveOutcome::Failed => (ToastKind::Error, SAVE_FAILED_MESSAGE),
        };
        Some(ToastMessage {
            message: message.to_string(),
            kind,
        })
    }
}

/// One `NodeRef` per dose time input, indexed by `DoseField`
#[derive(Clone, PartialEq, Default)]
pub struct FieldRefs {
    refs: Rc<[NodeRef; 6]>,
}

impl FieldRefs {
    pub fn get(&self, field: DoseField) -> &NodeRef {
        &self.refs[field.index()]
    }
}

fn restored_form() -> ScheduleForm {
    let mut form = ScheduleForm::new();
    form.restore(&browser_preferences().load_local());
    form
}

/// Persist locally, push to the backend and report how it went
async fn persist(api_client: ApiClient, notifier: Notifier, form: ScheduleForm, announce: bool, message: String) {
    let schedule = form.to_schedule();

    let local_ok = match browser_preferences().save_local(&schedule, &form.repeat_options()) {
        Ok(()) => true,
        Err(e) => {
            Logger::error_with_component("schedule", &format!("Failed to save dose times locally: {}", e));
            false
        }
    };

    let remote_ok = match api_client.push_schedule(&schedule).await {
        Ok(()) => true,
        Err(e) => {
            Logger::error_with_component("schedule", &format!("Failed to save dose times: {}", e));
            false
        }
    };

    let outcome = SaveOutcome::new(local_ok, remote_ok);
    Logger::info_with_component("schedule", &format!("Save finished: {:?}", outcome));
    if let Some(toast) = outcome.feedback(announce, &message) {
        notifier.show(toast.message, toast.kind);
    }
}

/// Focus the input and open the native time picker where the browser has one
fn open_time_picker(input: &HtmlInputElement) {
    if input.focus().is_err() {
        Logger::debug_with_component("schedule", "Could not focus dose time input");
    }

    let Ok(show_picker) = js_sys::Reflect::get(input, &JsValue::from_str("showPicker")) else {
        return;
    };
    if let Some(show_picker) = show_picker.dyn_ref::<js_sys::Function>() {
        // Some browsers throw when the picker cannot be shown; focus is enough then
        let _ = show_picker.call0(input);
    }
}

pub struct UseDoseScheduleResult {
    pub form: ScheduleForm,
    pub saving: bool,
    pub field_refs: FieldRefs,
    pub actions: UseDoseScheduleActions,
}

#[derive(Clone, PartialEq)]
pub struct UseDoseScheduleActions {
    pub on_time_change: Callback<(DoseField, String)>,
    pub on_preset_change: Callback<String>,
    pub on_custom_number_change: Callback<String>,
    pub on_custom_unit_change: Callback<String>,
    pub save: Callback<()>,
    pub edit_single: Callback<DoseField>,
    pub delete_single: Callback<DoseField>,
}

#[hook]
pub fn use_dose_schedule(api_client: &ApiClient) -> UseDoseScheduleResult {
    let notifier = use_context::<Notifier>().unwrap_or_default();
    let form = use_state(restored_form);
    let saving = use_state(|| false);
    let armed_field = use_state(|| Option::<DoseField>::None);
    let field_refs = use_memo((), |_| FieldRefs::default());

    let start_save = {
        let api_client = api_client.clone();
        let saving = saving.clone();
        Callback::from(move |(form, announce, message): (ScheduleForm, bool, String)| {
            let api_client = api_client.clone();
            let notifier = notifier.clone();
            let saving = saving.clone();
            saving.set(true);
            spawn_local(async move {
                persist(api_client, notifier, form, announce, message).await;
                saving.set(false);
            });
        })
    };

    let on_time_change = {
        let form = form.clone();
        let armed_field = armed_field.clone();
        let start_save = start_save.clone();
        Callback::from(move |(field, value): (DoseField, String)| {
            let mut next = (*form).clone();
            next.set_time(field, value);
            form.set(next.clone());

            // A pending single-field edit saves silently on its first change
            if *armed_field == Some(field) {
                armed_field.set(None);
                start_save.emit((next, false, String::new()));
            }
        })
    };

    let on_preset_change = {
        let form = form.clone();
        Callback::from(move |preset: String| {
            let mut next = (*form).clone();
            next.repeat_preset = preset;
            form.set(next);
        })
    };

    let on_custom_number_change = {
        let form = form.clone();
        Callback::from(move |number: String| {
            let mut next = (*form).clone();
            next.custom_number = number;
            form.set(next);
        })
    };

    let on_custom_unit_change = {
        let form = form.clone();
        Callback::from(move |unit: String| {
            let mut next = (*form).clone();
            next.custom_unit = unit;
            form.set(next);
        })
    };

    let save = {
        let form = form.clone();
        let start_save = start_save.clone();
        Callback::from(move |_| {
            start_save.emit(((*form).clone(), true, SAVED_MESSAGE.to_string()));
        })
    };

    let edit_single = {
        let field_refs = (*field_refs).clone();
        let armed_field = armed_field.clone();
        Callback::from(move |field: DoseField| {
            let Some(input) = field_refs.get(field).cast::<HtmlInputElement>() else {
                Logger::warn_with_component("schedule", &format!("No input mounted for {}", field.element_id()));
                return;
            };
            open_time_picker(&input);
            armed_field.set(Some(field));
        })
    };

    let delete_single = {
        let form = form.clone();
        let start_save = start_save.clone();
        Callback::from(move |field: DoseField| {
            let mut next = (*form).clone();
            next.clear_time(field);
            form.set(next.clone());
            start_save.emit((next, true, DELETED_MESSAGE.to_string()));
        })
    };

    UseDoseScheduleResult {
        form: (*form).clone(),
        saving: *saving,
        field_refs: (*field_refs).clone(),
        actions: UseDoseScheduleActions {
            on_time_change,
            on_preset_change,
            on_custom_number_change,
            on_custom_unit_change,
            save,
            edit_single,
            delete_single,
        },
    }
}
