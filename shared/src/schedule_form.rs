//! State behind the dose schedule form: six time inputs and the repeat selector.

use crate::preferences::RestoredPreferences;
use crate::{DoseField, DoseSchedule, RepeatOptions, RepeatUnit, CUSTOM_PRESET};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleForm {
    /// Input values indexed like `DoseField::ALL`, empty = no dose
    times: [String; 6],
    pub repeat_preset: String,
    pub custom_number: String,
    pub custom_unit: String,
}

impl Default for ScheduleForm {
    fn default() -> Self {
        Self {
            times: Default::default(),
            repeat_preset: "0".to_string(),
            custom_number: String::new(),
            custom_unit: RepeatUnit::Days.as_str().to_string(),
        }
    }
}

impl ScheduleForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn time(&self, field: DoseField) -> &str {
        &self.times[field.index()]
    }

    pub fn set_time(&mut self, field: DoseField, value: impl Into<String>) {
        self.times[field.index()] = value.into();
    }

    pub fn clear_time(&mut self, field: DoseField) {
        self.times[field.index()].clear();
    }

    /// The custom amount/unit inputs are only shown for the custom preset
    pub fn custom_controls_visible(&self) -> bool {
        self.repeat_preset == CUSTOM_PRESET
    }

    pub fn repeat_options(&self) -> RepeatOptions {
        RepeatOptions {
            preset: Some(self.repeat_preset.clone()),
            number: Some(self.custom_number.clone()).filter(|n| !n.is_empty()),
            unit: Some(self.custom_unit.clone()),
        }
    }

    pub fn repeat_days(&self) -> u32 {
        self.repeat_options().repeat_days()
    }

    /// Schedule to persist and push. Blank inputs become `null`.
    pub fn to_schedule(&self) -> DoseSchedule {
        let mut schedule = DoseSchedule {
            repeat_days: self.repeat_days(),
            ..DoseSchedule::default()
        };
        for field in DoseField::ALL {
            let value = self.time(field).trim();
            if !value.is_empty() {
                *schedule.meal_mut(field.meal).slot_mut(field.timing) = Some(value.to_string());
            }
        }
        schedule
    }

    /// Fill the form from saved preferences.
    ///
    /// Missing keys and missing values leave the current input untouched.
    pub fn restore(&mut self, restored: &RestoredPreferences) {
        if let Some(repeat) = &restored.repeat {
            if let Some(preset) = &repeat.preset {
                self.repeat_preset = preset.clone();
            }
            if repeat.is_custom() {
                if let Some(number) = &repeat.number {
                    self.custom_number = number.clone();
                }
                if let Some(unit) = repeat.unit.as_ref().filter(|u| !u.is_empty()) {
                    self.custom_unit = unit.clone();
                }
            }
        }

        if let Some(schedule) = &restored.schedule {
            for field in DoseField::ALL {
                if let Some(time) = schedule.time(field).filter(|t| !t.is_empty()) {
                    self.set_time(field, time);
                }
            }
        }
    }
}
