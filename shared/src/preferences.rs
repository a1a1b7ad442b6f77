//! Local persistence of the schedule form.
//!
//! Two JSON blobs are stored under fixed keys: the dose schedule and the raw
//! repeat selector state. They are read independently, so a corrupt repeat blob
//! never prevents the dose times from being restored.

use crate::{DoseSchedule, RepeatOptions};
use serde::de::DeserializeOwned;
use std::cell::RefCell;
use std::collections::HashMap;
use thiserror::Error;

pub const DOSE_TIMES_KEY: &str = "doseTimes";
pub const DOSE_REPEAT_KEY: &str = "doseRepeat";

#[derive(Debug, Error)]
pub enum PreferenceError {
    #[error("storage unavailable: {0}")]
    Storage(String),
    #[error("failed to serialize preferences: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("failed to parse saved value for {key}: {source}")]
    Parse {
        key: &'static str,
        source: serde_json::Error,
    },
}

/// String key-value storage such as the browser's localStorage
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceError>;
    fn set(&self, key: &str, value: &str) -> Result<(), PreferenceError>;
}

/// In-memory store, used where no browser storage exists
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        Ok(self.values.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PreferenceError> {
        self.values.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// What could be recovered from storage. Each part is `None` when missing or unreadable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RestoredPreferences {
    pub schedule: Option<DoseSchedule>,
    pub repeat: Option<RepeatOptions>,
}

pub struct PreferenceStore<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> PreferenceStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn save_local(&self, schedule: &DoseSchedule, repeat: &RepeatOptions) -> Result<(), PreferenceError> {
        let schedule_json = serde_json::to_string(schedule)?;
        let repeat_json = serde_json::to_string(repeat)?;
        self.store.set(DOSE_TIMES_KEY, &schedule_json)?;
        self.store.set(DOSE_REPEAT_KEY, &repeat_json)?;
        Ok(())
    }

    pub fn load_local(&self) -> RestoredPreferences {
        RestoredPreferences {
            schedule: self.load_key(DOSE_TIMES_KEY),
            repeat: self.load_key(DOSE_REPEAT_KEY),
        }
    }

    fn load_key<T: DeserializeOwned>(&self, key: &'static str) -> Option<T> {
        match self.read_key(key) {
            Ok(value) => value,
            Err(e) => {
                log::error!("Failed to load saved preferences: {}", e);
                None
            }
        }
    }

    fn read_key<T: DeserializeOwned>(&self, key: &'static str) -> Result<Option<T>, PreferenceError> {
        let Some(raw) = self.store.get(key)? else {
            return Ok(None);
        };
        if raw.is_empty() {
            return Ok(None);
        }
        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|source| PreferenceError::Parse { key, source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_schedule() -> DoseSchedule {
        let mut schedule = DoseSchedule::default();
        schedule.morning.before = Some("07:30".to_string());
        schedule.night.after = Some("21:00".to_string());
        schedule.repeat_days = 14;
        schedule
    }

    fn custom_repeat() -> RepeatOptions {
        RepeatOptions {
            preset: Some("custom".to_string()),
            number: Some("2".to_string()),
            unit: Some("weeks".to_string()),
        }
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let prefs = PreferenceStore::new(MemoryStore::new());
        prefs.save_local(&sample_schedule(), &custom_repeat()).unwrap();

        let restored = prefs.load_local();
        assert_eq!(restored.schedule, Some(sample_schedule()));
        assert_eq!(restored.repeat, Some(custom_repeat()));
    }

    #[test]
    fn test_empty_storage_restores_nothing() {
        let prefs = PreferenceStore::new(MemoryStore::new());
        assert_eq!(prefs.load_local(), RestoredPreferences::default());
    }

    #[test]
    fn test_corrupt_repeat_blob_does_not_block_schedule() {
        let store = MemoryStore::new();
        store
            .set(DOSE_TIMES_KEY, &serde_json::to_string(&sample_schedule()).unwrap())
            .unwrap();
        store.set(DOSE_REPEAT_KEY, "{not json").unwrap();

        let restored = PreferenceStore::new(store).load_local();
        assert_eq!(restored.schedule, Some(sample_schedule()));
        assert_eq!(restored.repeat, None);
    }

    #[test]
    fn test_corrupt_schedule_blob_does_not_block_repeat() {
        let store = MemoryStore::new();
        store.set(DOSE_TIMES_KEY, "[1, 2").unwrap();
        store
            .set(DOSE_REPEAT_KEY, &serde_json::to_string(&custom_repeat()).unwrap())
            .unwrap();

        let restored = PreferenceStore::new(store).load_local();
        assert_eq!(restored.schedule, None);
        assert_eq!(restored.repeat, Some(custom_repeat()));
    }

    #[test]
    fn test_parse_error_names_key() {
        let store = MemoryStore::new();
        store.set(DOSE_TIMES_KEY, "nope").unwrap();
        let prefs = PreferenceStore::new(store);

        let err = prefs.read_key::<DoseSchedule>(DOSE_TIMES_KEY).unwrap_err();
        assert!(matches!(err, PreferenceError::Parse { key: DOSE_TIMES_KEY, .. }));
    }
}
