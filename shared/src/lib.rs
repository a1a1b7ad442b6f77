use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub mod display;
pub mod dose_log_table;
pub mod preferences;
pub mod schedule_form;

pub use display::{LogRow, StatusBadge, StatusBadgeKind};
pub use dose_log_table::{DoseLogTable, FilterCriteria, PageDirection, RequestSequencer};
pub use preferences::{
    KeyValueStore, MemoryStore, PreferenceError, PreferenceStore, RestoredPreferences,
    DOSE_REPEAT_KEY, DOSE_TIMES_KEY,
};
pub use schedule_form::ScheduleForm;

/// Preset value that switches the repeat selector to a custom amount + unit
pub const CUSTOM_PRESET: &str = "custom";

/// Meal a dose is attached to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Meal {
    Morning,
    Afternoon,
    Night,
}

impl Meal {
    pub const ALL: [Meal; 3] = [Meal::Morning, Meal::Afternoon, Meal::Night];

    /// Wire/storage form ("morning", "afternoon", "night")
    pub fn as_str(&self) -> &'static str {
        match self {
            Meal::Morning => "morning",
            Meal::Afternoon => "afternoon",
            Meal::Night => "night",
        }
    }

    /// Name of the meal itself, used in phrases like "before breakfast"
    pub fn meal_name(&self) -> &'static str {
        match self {
            Meal::Morning => "breakfast",
            Meal::Afternoon => "lunch",
            Meal::Night => "dinner",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Meal::Morning => "🌅",
            Meal::Afternoon => "☀️",
            Meal::Night => "🌙",
        }
    }

    /// Capitalized label for form headings
    pub fn label(&self) -> &'static str {
        match self {
            Meal::Morning => "Morning",
            Meal::Afternoon => "Afternoon",
            Meal::Night => "Night",
        }
    }
}

impl FromStr for Meal {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "morning" => Ok(Meal::Morning),
            "afternoon" => Ok(Meal::Afternoon),
            "night" => Ok(Meal::Night),
            other => Err(format!("unknown meal: {}", other)),
        }
    }
}

impl fmt::Display for Meal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a dose is taken before or after its meal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Timing {
    Before,
    After,
}

impl Timing {
    pub const ALL: [Timing; 2] = [Timing::Before, Timing::After];

    pub fn as_str(&self) -> &'static str {
        match self {
            Timing::Before => "before",
            Timing::After => "after",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Timing::Before => "Before",
            Timing::After => "After",
        }
    }
}

impl FromStr for Timing {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "before" => Ok(Timing::Before),
            "after" => Ok(Timing::After),
            other => Err(format!("unknown timing: {}", other)),
        }
    }
}

impl fmt::Display for Timing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolution of a logged dose. Anything else the backend sends is kept as raw text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DoseStatus {
    Taken,
    Missed,
}

impl DoseStatus {
    pub const ALL: [DoseStatus; 2] = [DoseStatus::Taken, DoseStatus::Missed];

    pub fn as_str(&self) -> &'static str {
        match self {
            DoseStatus::Taken => "taken",
            DoseStatus::Missed => "missed",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DoseStatus::Taken => "Taken",
            DoseStatus::Missed => "Missed",
        }
    }
}

impl FromStr for DoseStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "taken" => Ok(DoseStatus::Taken),
            "missed" => Ok(DoseStatus::Missed),
            other => Err(format!("unknown status: {}", other)),
        }
    }
}

impl fmt::Display for DoseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reference to one of the six dose time inputs on the schedule form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DoseField {
    pub meal: Meal,
    pub timing: Timing,
}

impl DoseField {
    pub const ALL: [DoseField; 6] = [
        DoseField::new(Meal::Morning, Timing::Before),
        DoseField::new(Meal::Morning, Timing::After),
        DoseField::new(Meal::Afternoon, Timing::Before),
        DoseField::new(Meal::Afternoon, Timing::After),
        DoseField::new(Meal::Night, Timing::Before),
        DoseField::new(Meal::Night, Timing::After),
    ];

    pub const fn new(meal: Meal, timing: Timing) -> Self {
        Self { meal, timing }
    }

    /// Element id of the input backing this field
    pub fn element_id(&self) -> &'static str {
        match (self.meal, self.timing) {
            (Meal::Morning, Timing::Before) => "morningBefore",
            (Meal::Morning, Timing::After) => "morningAfter",
            (Meal::Afternoon, Timing::Before) => "afternoonBefore",
            (Meal::Afternoon, Timing::After) => "afternoonAfter",
            (Meal::Night, Timing::Before) => "nightBefore",
            (Meal::Night, Timing::After) => "nightAfter",
        }
    }

    /// Position of this field in `DoseField::ALL`
    pub fn index(&self) -> usize {
        let meal = match self.meal {
            Meal::Morning => 0,
            Meal::Afternoon => 1,
            Meal::Night => 2,
        };
        let timing = match self.timing {
            Timing::Before => 0,
            Timing::After => 1,
        };
        meal * 2 + timing
    }
}

/// Before/after dose times for one meal. `None` means no dose is scheduled.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealDoses {
    #[serde(default)]
    pub before: Option<String>,
    #[serde(default)]
    pub after: Option<String>,
}

impl MealDoses {
    pub fn get(&self, timing: Timing) -> Option<&str> {
        match timing {
            Timing::Before => self.before.as_deref(),
            Timing::After => self.after.as_deref(),
        }
    }

    pub fn slot_mut(&mut self, timing: Timing) -> &mut Option<String> {
        match timing {
            Timing::Before => &mut self.before,
            Timing::After => &mut self.after,
        }
    }
}

/// Full dose schedule as posted to the backend and persisted locally
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DoseSchedule {
    #[serde(default)]
    pub morning: MealDoses,
    #[serde(default)]
    pub afternoon: MealDoses,
    #[serde(default)]
    pub night: MealDoses,
    /// Repeat interval in days, 0 = no repeat
    #[serde(default)]
    pub repeat_days: u32,
}

impl DoseSchedule {
    pub fn meal(&self, meal: Meal) -> &MealDoses {
        match meal {
            Meal::Morning => &self.morning,
            Meal::Afternoon => &self.afternoon,
            Meal::Night => &self.night,
        }
    }

    pub fn meal_mut(&mut self, meal: Meal) -> &mut MealDoses {
        match meal {
            Meal::Morning => &mut self.morning,
            Meal::Afternoon => &mut self.afternoon,
            Meal::Night => &mut self.night,
        }
    }

    pub fn time(&self, field: DoseField) -> Option<&str> {
        self.meal(field.meal).get(field.timing)
    }
}

/// Unit of a custom repeat interval
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RepeatUnit {
    Days,
    Weeks,
    Months,
}

impl RepeatUnit {
    pub const ALL: [RepeatUnit; 3] = [RepeatUnit::Days, RepeatUnit::Weeks, RepeatUnit::Months];

    /// Months are approximated as 30 days
    pub fn days_per_unit(&self) -> u32 {
        match self {
            RepeatUnit::Days => 1,
            RepeatUnit::Weeks => 7,
            RepeatUnit::Months => 30,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RepeatUnit::Days => "days",
            RepeatUnit::Weeks => "weeks",
            RepeatUnit::Months => "months",
        }
    }

    /// Unrecognized unit text counts as days
    pub fn parse_lenient(s: &str) -> Self {
        s.parse().unwrap_or(RepeatUnit::Days)
    }
}

impl FromStr for RepeatUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "days" => Ok(RepeatUnit::Days),
            "weeks" => Ok(RepeatUnit::Weeks),
            "months" => Ok(RepeatUnit::Months),
            other => Err(format!("unknown repeat unit: {}", other)),
        }
    }
}

impl fmt::Display for RepeatUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Effective repeat interval chosen on the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepeatPreference {
    /// Predefined interval in days (0 = no repeat)
    Preset(u32),
    /// Custom interval, amount is always > 0
    Custom { amount: u32, unit: RepeatUnit },
}

impl RepeatPreference {
    pub fn custom(amount: u32, unit: RepeatUnit) -> Option<Self> {
        (amount > 0).then_some(RepeatPreference::Custom { amount, unit })
    }

    pub fn days(&self) -> u32 {
        match *self {
            RepeatPreference::Preset(days) => days,
            RepeatPreference::Custom { amount, unit } => amount.saturating_mul(unit.days_per_unit()),
        }
    }
}

/// Raw repeat selector state, persisted under the repeat preference key
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepeatOptions {
    /// `"custom"` or a day count such as `"7"`
    #[serde(default)]
    pub preset: Option<String>,
    /// Custom amount as typed into the number input
    #[serde(default, deserialize_with = "number_or_string")]
    pub number: Option<String>,
    #[serde(default)]
    pub unit: Option<String>,
}

impl Default for RepeatOptions {
    fn default() -> Self {
        Self {
            preset: Some("0".to_string()),
            number: None,
            unit: Some(RepeatUnit::Days.as_str().to_string()),
        }
    }
}

impl RepeatOptions {
    pub fn is_custom(&self) -> bool {
        self.preset.as_deref() == Some(CUSTOM_PRESET)
    }

    /// Typed view of the selection, `None` when it does not describe a valid interval
    pub fn preference(&self) -> Option<RepeatPreference> {
        if !self.is_custom() {
            let preset = self.preset.as_deref().unwrap_or("0");
            return preset.trim().parse::<u32>().ok().map(RepeatPreference::Preset);
        }

        let amount = leading_integer(self.number.as_deref()?)?;
        let amount = u32::try_from(amount).ok()?;
        let unit = RepeatUnit::parse_lenient(self.unit.as_deref().unwrap_or_default());
        RepeatPreference::custom(amount, unit)
    }

    /// Effective repeat interval in days; anything unparseable yields 0
    pub fn repeat_days(&self) -> u32 {
        self.preference().map(|p| p.days()).unwrap_or(0)
    }
}

/// Integer at the start of `text`, ignoring anything after it, so `"2.5"` reads as 2
fn leading_integer(text: &str) -> Option<i64> {
    let text = text.trim();
    let digits_start = usize::from(text.starts_with(['+', '-']));
    let digits_end = text[digits_start..]
        .find(|c: char| !c.is_ascii_digit())
        .map_or(text.len(), |i| digits_start + i);
    text[..digits_end].parse().ok()
}

// The number input value may have been stored as either JSON text or a number.
fn number_or_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(s)) => Some(s),
        Some(serde_json::Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

/// One historical dose record from the backend.
///
/// Values are kept exactly as received; typed accessors return `None` for values
/// outside the known categories so that they still show up in the table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DoseLogEntry {
    /// Calendar date, `YYYY-MM-DD`
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub meal: Option<String>,
    #[serde(default)]
    pub timing: Option<String>,
    #[serde(default)]
    pub scheduled_time: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

impl DoseLogEntry {
    pub fn meal_kind(&self) -> Option<Meal> {
        self.meal.as_deref()?.parse().ok()
    }

    pub fn timing_kind(&self) -> Option<Timing> {
        self.timing.as_deref()?.parse().ok()
    }

    pub fn status_kind(&self) -> Option<DoseStatus> {
        self.status.as_deref()?.parse().ok()
    }
}

/// Turn a `/api/dose-log` response body into entries.
///
/// A payload that is not an array (an error object, `null`, ...) becomes an empty
/// collection. Array elements that are not entry-shaped are skipped.
pub fn normalize_dose_log_payload(payload: serde_json::Value) -> Vec<DoseLogEntry> {
    let serde_json::Value::Array(items) = payload else {
        log::warn!("dose log payload is not an array, treating as empty");
        return Vec::new();
    };

    items
        .into_iter()
        .enumerate()
        .filter_map(|(index, item)| match serde_json::from_value::<DoseLogEntry>(item) {
            Ok(entry) => Some(entry),
            Err(e) => {
                log::warn!("skipping malformed dose log entry {}: {}", index, e);
                None
            }
        })
        .collect()
}
