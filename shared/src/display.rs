//! Presentation helpers for the dose history table.
//!
//! Everything here is a pure mapping from log data to display text so the
//! table component only has to lay out cells.

use crate::{DoseLogEntry, DoseStatus, Meal};

pub const NOT_AVAILABLE: &str = "N/A";
pub const EMPTY_STATE_TEXT: &str = "No dose history found for selected filters";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusBadgeKind {
    Taken,
    Missed,
    Other,
}

impl StatusBadgeKind {
    pub fn css_class(&self) -> &'static str {
        match self {
            StatusBadgeKind::Taken => "badge badge-success",
            StatusBadgeKind::Missed => "badge badge-error",
            StatusBadgeKind::Other => "badge badge-info",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusBadge {
    pub kind: StatusBadgeKind,
    pub label: String,
}

/// Badge for a raw status value. Matching ignores case; unknown values keep their text.
pub fn status_badge(status: Option<&str>) -> StatusBadge {
    let known = status.and_then(|s| s.to_lowercase().parse::<DoseStatus>().ok());
    match known {
        Some(DoseStatus::Taken) => StatusBadge {
            kind: StatusBadgeKind::Taken,
            label: DoseStatus::Taken.label().to_string(),
        },
        Some(DoseStatus::Missed) => StatusBadge {
            kind: StatusBadgeKind::Missed,
            label: DoseStatus::Missed.label().to_string(),
        },
        None => StatusBadge {
            kind: StatusBadgeKind::Other,
            label: status
                .filter(|s| !s.is_empty())
                .unwrap_or("Unknown")
                .to_string(),
        },
    }
}

fn parse_meal(meal: Option<&str>) -> Option<Meal> {
    meal.and_then(|m| m.to_lowercase().parse().ok())
}

/// Emoji shown next to the meal name, empty for unknown meals
pub fn meal_icon(meal: Option<&str>) -> &'static str {
    parse_meal(meal).map(|m| m.icon()).unwrap_or("")
}

/// "before breakfast", "after dinner", ...
///
/// Unknown meals keep their raw name. Timings other than before/after are shown as-is.
pub fn timing_phrase(meal: Option<&str>, timing: Option<&str>) -> String {
    let meal_name = parse_meal(meal)
        .map(|m| m.meal_name())
        .or(meal)
        .filter(|name| !name.is_empty());

    match (timing, meal_name) {
        (Some(t @ ("before" | "after")), Some(name)) => format!("{} {}", t, name),
        (Some(t), _) => t.to_string(),
        (None, _) => String::new(),
    }
}

pub fn cell_or_na(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => NOT_AVAILABLE.to_string(),
    }
}

pub fn pagination_summary(current_page: usize, total_pages: usize, total_records: usize) -> String {
    format!("Page {} of {} ({} records)", current_page, total_pages, total_records)
}

/// One rendered row of the dose history table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRow {
    pub date: String,
    pub meal_icon: &'static str,
    pub meal: String,
    pub timing: String,
    pub scheduled_time: String,
    pub status: StatusBadge,
}

impl LogRow {
    pub fn from_entry(entry: &DoseLogEntry) -> Self {
        let timing = timing_phrase(entry.meal.as_deref(), entry.timing.as_deref());
        Self {
            date: cell_or_na(entry.date.as_deref()),
            meal_icon: meal_icon(entry.meal.as_deref()),
            meal: cell_or_na(entry.meal.as_deref()),
            timing: cell_or_na(Some(timing.as_str())),
            scheduled_time: cell_or_na(entry.scheduled_time.as_deref()),
            status: status_badge(entry.status.as_deref()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timing_phrase() {
        assert_eq!(timing_phrase(Some("morning"), Some("before")), "before breakfast");
        assert_eq!(timing_phrase(Some("afternoon"), Some("after")), "after lunch");
        assert_eq!(timing_phrase(Some("Night"), Some("after")), "after dinner");
        assert_eq!(timing_phrase(Some("brunch"), Some("before")), "before brunch");
        assert_eq!(timing_phrase(Some("night"), Some("during")), "during");
        assert_eq!(timing_phrase(None, Some("before")), "before");
        assert_eq!(timing_phrase(Some("night"), None), "");
    }

    #[test]
    fn test_meal_icon() {
        assert_eq!(meal_icon(Some("morning")), "🌅");
        assert_eq!(meal_icon(Some("NIGHT")), "🌙");
        assert_eq!(meal_icon(Some("brunch")), "");
        assert_eq!(meal_icon(None), "");
    }

    #[test]
    fn test_status_badge() {
        let taken = status_badge(Some("Taken"));
        assert_eq!(taken.kind, StatusBadgeKind::Taken);
        assert_eq!(taken.label, "Taken");

        assert_eq!(status_badge(Some("missed")).kind, StatusBadgeKind::Missed);

        let other = status_badge(Some("snoozed"));
        assert_eq!(other.kind, StatusBadgeKind::Other);
        assert_eq!(other.label, "snoozed");

        assert_eq!(status_badge(None).label, "Unknown");
        assert_eq!(status_badge(Some("")).label, "Unknown");
    }

    #[test]
    fn test_row_from_sparse_entry() {
        let row = LogRow::from_entry(&DoseLogEntry {
            date: Some("2025-06-15".to_string()),
            ..DoseLogEntry::default()
        });

        assert_eq!(row.date, "2025-06-15");
        assert_eq!(row.meal, NOT_AVAILABLE);
        assert_eq!(row.timing, NOT_AVAILABLE);
        assert_eq!(row.scheduled_time, NOT_AVAILABLE);
        assert_eq!(row.status.kind, StatusBadgeKind::Other);
    }

    #[test]
    fn test_pagination_summary() {
        assert_eq!(pagination_summary(2, 3, 25), "Page 2 of 3 (25 records)");
    }
}
