use gloo::storage::{LocalStorage, Storage};
use shared::{KeyValueStore, PreferenceError, PreferenceStore};

/// `KeyValueStore` over the browser's localStorage
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        LocalStorage::raw()
            .get_item(key)
            .map_err(|e| PreferenceError::Storage(format!("{:?}", e)))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PreferenceError> {
        LocalStorage::raw()
            .set_item(key, value)
            .map_err(|e| PreferenceError::Storage(format!("{:?}", e)))
    }
}

pub fn browser_preferences() -> PreferenceStore<BrowserStorage> {
    PreferenceStore::new(BrowserStorage)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{DoseSchedule, RepeatOptions, DOSE_REPEAT_KEY, DOSE_TIMES_KEY};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_round_trip_through_local_storage() {
        let mut schedule = DoseSchedule::default();
        schedule.afternoon.after = Some("13:30".to_string());
        let repeat = RepeatOptions::default();

        let prefs = browser_preferences();
        prefs.save_local(&schedule, &repeat).unwrap();

        let restored = prefs.load_local();
        assert_eq!(restored.schedule, Some(schedule));
        assert_eq!(restored.repeat, Some(repeat));

        LocalStorage::delete(DOSE_TIMES_KEY);
        LocalStorage::delete(DOSE_REPEAT_KEY);
    }

    #[wasm_bindgen_test]
    fn test_corrupt_value_is_ignored() {
        BrowserStorage.set(DOSE_REPEAT_KEY, "{broken").unwrap();
        assert_eq!(browser_preferences().load_local().repeat, None);
        LocalStorage::delete(DOSE_REPEAT_KEY);
    }
}
