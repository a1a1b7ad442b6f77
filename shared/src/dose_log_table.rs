//! Dose history filtering and pagination.
//!
//! `DoseLogTable` owns the full set of log entries fetched from the backend and
//! the subset that passes the current `FilterCriteria`. The visible page is a
//! window over the filtered subset.
//!
//! ## Invariants
//!
//! - `filtered` is always recomputed from `all` in full, never patched.
//! - `current_page` stays within `[1, total_pages]`, where
//!   `total_pages = max(1, ceil(filtered.len() / page_size))`.
//! - Entries keep the order the backend returned them in.

use crate::{DoseLogEntry, DoseStatus, Meal, Timing};

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Page sizes offered by the rows-per-page selector
pub const PAGE_SIZE_OPTIONS: [usize; 4] = [5, 10, 25, 50];

/// Snapshot of the filter panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Inclusive lower date bound, empty = unbounded
    pub date_from: String,
    /// Inclusive upper date bound, empty = unbounded
    pub date_to: String,
    pub morning: bool,
    pub afternoon: bool,
    pub night: bool,
    pub before: bool,
    pub after: bool,
    pub taken: bool,
    pub missed: bool,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            date_from: String::new(),
            date_to: String::new(),
            morning: true,
            afternoon: true,
            night: true,
            before: true,
            after: true,
            taken: true,
            missed: true,
        }
    }
}

impl FilterCriteria {
    pub fn meal_enabled(&self, meal: Meal) -> bool {
        match meal {
            Meal::Morning => self.morning,
            Meal::Afternoon => self.afternoon,
            Meal::Night => self.night,
        }
    }

    pub fn set_meal(&mut self, meal: Meal, enabled: bool) {
        match meal {
            Meal::Morning => self.morning = enabled,
            Meal::Afternoon => self.afternoon = enabled,
            Meal::Night => self.night = enabled,
        }
    }

    pub fn timing_enabled(&self, timing: Timing) -> bool {
        match timing {
            Timing::Before => self.before,
            Timing::After => self.after,
        }
    }

    pub fn set_timing(&mut self, timing: Timing, enabled: bool) {
        match timing {
            Timing::Before => self.before = enabled,
            Timing::After => self.after = enabled,
        }
    }

    pub fn status_enabled(&self, status: DoseStatus) -> bool {
        match status {
            DoseStatus::Taken => self.taken,
            DoseStatus::Missed => self.missed,
        }
    }

    pub fn set_status(&mut self, status: DoseStatus, enabled: bool) {
        match status {
            DoseStatus::Taken => self.taken = enabled,
            DoseStatus::Missed => self.missed = enabled,
        }
    }

    /// Whether an entry passes every predicate.
    ///
    /// Dates compare as strings. Entries without a date, and meal/timing/status
    /// values outside the known categories, are never rejected by that predicate.
    pub fn matches(&self, entry: &DoseLogEntry) -> bool {
        if let Some(date) = entry.date.as_deref() {
            if !self.date_from.is_empty() && date < self.date_from.as_str() {
                return false;
            }
            if !self.date_to.is_empty() && date > self.date_to.as_str() {
                return false;
            }
        }

        if let Some(meal) = entry.meal_kind() {
            if !self.meal_enabled(meal) {
                return false;
            }
        }

        if let Some(timing) = entry.timing_kind() {
            if !self.timing_enabled(timing) {
                return false;
            }
        }

        if let Some(status) = entry.status_kind() {
            if !self.status_enabled(status) {
                return false;
            }
        }

        true
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageDirection {
    Prev,
    Next,
}

/// Hands out monotonically increasing request numbers so that a slow response
/// can be recognized once a newer one has been applied.
#[derive(Debug, Default)]
pub struct RequestSequencer {
    last_issued: u64,
}

impl RequestSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next(&mut self) -> u64 {
        self.last_issued += 1;
        self.last_issued
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DoseLogTable {
    all: Vec<DoseLogEntry>,
    filtered: Vec<DoseLogEntry>,
    criteria: FilterCriteria,
    current_page: usize,
    page_size: usize,
    applied_sequence: u64,
}

impl Default for DoseLogTable {
    fn default() -> Self {
        Self::new()
    }
}

impl DoseLogTable {
    pub fn new() -> Self {
        Self {
            all: Vec::new(),
            filtered: Vec::new(),
            criteria: FilterCriteria::default(),
            current_page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            applied_sequence: 0,
        }
    }

    /// Replace the whole log set with a fetch result.
    ///
    /// Returns `false` and leaves the table untouched when `sequence` is older
    /// than a response that has already been applied.
    pub fn replace_logs(&mut self, sequence: u64, logs: Vec<DoseLogEntry>) -> bool {
        if sequence < self.applied_sequence {
            log::debug!(
                "discarding stale dose log response {} (applied {})",
                sequence,
                self.applied_sequence
            );
            return false;
        }

        self.applied_sequence = sequence;
        self.all = logs;
        self.criteria = FilterCriteria::default();
        self.filtered = self.all.clone();
        self.current_page = 1;
        true
    }

    pub fn apply_filters(&mut self, criteria: FilterCriteria) -> &[DoseLogEntry] {
        self.filtered = self
            .all
            .iter()
            .filter(|entry| criteria.matches(entry))
            .cloned()
            .collect();
        self.criteria = criteria;
        self.current_page = 1;
        &self.filtered
    }

    pub fn clear_filters(&mut self) {
        self.criteria = FilterCriteria::default();
        self.filtered = self.all.clone();
        self.current_page = 1;
    }

    /// A size of 0 falls back to the default.
    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = if page_size == 0 { DEFAULT_PAGE_SIZE } else { page_size };
        self.current_page = 1;
    }

    /// Move one page back or forward. Returns `false` at a boundary.
    pub fn go_to_page(&mut self, direction: PageDirection) -> bool {
        match direction {
            PageDirection::Prev if self.has_prev() => {
                self.current_page -= 1;
                true
            }
            PageDirection::Next if self.has_next() => {
                self.current_page += 1;
                true
            }
            _ => false,
        }
    }

    pub fn total_records(&self) -> usize {
        self.filtered.len()
    }

    pub fn total_pages(&self) -> usize {
        self.total_records().div_ceil(self.page_size).max(1)
    }

    pub fn current_page(&self) -> usize {
        self.current_page.clamp(1, self.total_pages())
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn has_prev(&self) -> bool {
        self.current_page() > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page() < self.total_pages()
    }

    pub fn current_page_slice(&self) -> &[DoseLogEntry] {
        let start = (self.current_page() - 1) * self.page_size;
        let end = (start + self.page_size).min(self.filtered.len());
        self.filtered.get(start..end).unwrap_or(&[])
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn all_logs(&self) -> &[DoseLogEntry] {
        &self.all
    }

    pub fn filtered_logs(&self) -> &[DoseLogEntry] {
        &self.filtered
    }

    /// Summary line shown under the table
    pub fn summary(&self) -> String {
        crate::display::pagination_summary(self.current_page(), self.total_pages(), self.total_records())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(date: &str, meal: &str, timing: &str, status: &str) -> DoseLogEntry {
        DoseLogEntry {
            date: Some(date.to_string()),
            meal: Some(meal.to_string()),
            timing: Some(timing.to_string()),
            scheduled_time: Some("08:00".to_string()),
            status: Some(status.to_string()),
        }
    }

    fn numbered_logs(count: usize) -> Vec<DoseLogEntry> {
        (1..=count)
            .map(|i| {
                let mut e = entry(&format!("2025-06-{:02}", (i % 28) + 1), "morning", "before", "taken");
                e.scheduled_time = Some(format!("record-{}", i));
                e
            })
            .collect()
    }

    fn sample_logs() -> Vec<DoseLogEntry> {
        vec![
            entry("2025-06-01", "morning", "before", "taken"),
            entry("2025-06-02", "afternoon", "after", "missed"),
            entry("2025-06-03", "night", "before", "taken"),
            entry("2025-06-04", "morning", "after", "snoozed"),
            entry("2025-06-05", "brunch", "during", "pending"),
        ]
    }

    fn loaded(logs: Vec<DoseLogEntry>) -> DoseLogTable {
        let mut table = DoseLogTable::new();
        table.replace_logs(1, logs);
        table
    }

    #[test]
    fn test_replace_logs_resets_view() {
        let mut table = loaded(sample_logs());
        table.apply_filters(FilterCriteria {
            morning: false,
            ..FilterCriteria::default()
        });
        table.go_to_page(PageDirection::Next);

        assert!(table.replace_logs(2, sample_logs()));
        assert_eq!(table.filtered_logs(), table.all_logs());
        assert_eq!(table.criteria(), &FilterCriteria::default());
        assert_eq!(table.current_page(), 1);
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut sequencer = RequestSequencer::new();
        let first = sequencer.next();
        let second = sequencer.next();
        assert!(second > first);

        let mut table = DoseLogTable::new();
        assert!(table.replace_logs(second, sample_logs()));
        assert!(!table.replace_logs(first, Vec::new()));
        assert_eq!(table.all_logs().len(), 5);
    }

    #[test]
    fn test_date_range_filter_is_inclusive() {
        let mut table = loaded(sample_logs());
        let filtered = table.apply_filters(FilterCriteria {
            date_from: "2025-06-02".to_string(),
            date_to: "2025-06-04".to_string(),
            ..FilterCriteria::default()
        });

        let dates: Vec<_> = filtered.iter().filter_map(|e| e.date.as_deref()).collect();
        assert_eq!(dates, vec!["2025-06-02", "2025-06-03", "2025-06-04"]);
    }

    #[test]
    fn test_entries_without_date_pass_date_filter() {
        let mut undated = entry("", "morning", "before", "taken");
        undated.date = None;
        let mut table = loaded(vec![undated]);

        let filtered = table.apply_filters(FilterCriteria {
            date_from: "2025-01-01".to_string(),
            ..FilterCriteria::default()
        });
        assert_eq!(filtered.len(), 1);
    }

    #[test]
    fn test_category_filters() {
        let mut table = loaded(sample_logs());

        let filtered = table.apply_filters(FilterCriteria {
            morning: false,
            ..FilterCriteria::default()
        });
        assert!(filtered.iter().all(|e| e.meal_kind() != Some(Meal::Morning)));
        assert_eq!(filtered.len(), 3);

        let filtered = table.apply_filters(FilterCriteria {
            missed: false,
            ..FilterCriteria::default()
        });
        // "snoozed" and "pending" are not known statuses and stay visible
        assert_eq!(filtered.len(), 4);
        assert!(filtered.iter().any(|e| e.status.as_deref() == Some("snoozed")));

        let filtered = table.apply_filters(FilterCriteria {
            before: false,
            after: false,
            ..FilterCriteria::default()
        });
        // Only the entry with an unrecognized timing survives
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].timing.as_deref(), Some("during"));
    }

    #[test]
    fn test_unrecognized_values_pass_through_all_categories() {
        let mut table = loaded(sample_logs());
        let filtered = table.apply_filters(FilterCriteria {
            date_from: String::new(),
            date_to: String::new(),
            morning: false,
            afternoon: false,
            night: false,
            before: false,
            after: false,
            taken: false,
            missed: false,
        });
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].meal.as_deref(), Some("brunch"));
    }

    #[test]
    fn test_filtered_is_subset_and_exclusions_are_explained() {
        let logs = sample_logs();
        let criteria_set = vec![
            FilterCriteria::default(),
            FilterCriteria { night: false, taken: false, ..FilterCriteria::default() },
            FilterCriteria { date_to: "2025-06-03".to_string(), after: false, ..FilterCriteria::default() },
            FilterCriteria { date_from: "2025-06-10".to_string(), ..FilterCriteria::default() },
        ];

        for criteria in criteria_set {
            let mut table = loaded(logs.clone());
            let filtered = table.apply_filters(criteria.clone()).to_vec();

            for kept in &filtered {
                assert!(logs.contains(kept));
                assert!(criteria.matches(kept));
            }
            for excluded in logs.iter().filter(|e| !filtered.contains(e)) {
                assert!(!criteria.matches(excluded));
            }
        }
    }

    #[test]
    fn test_apply_filters_resets_page() {
        let mut table = loaded(numbered_logs(25));
        table.go_to_page(PageDirection::Next);
        assert_eq!(table.current_page(), 2);

        table.apply_filters(FilterCriteria::default());
        assert_eq!(table.current_page(), 1);
    }

    #[test]
    fn test_clear_filters_is_idempotent() {
        let mut table = loaded(sample_logs());
        table.apply_filters(FilterCriteria {
            date_from: "2025-06-03".to_string(),
            afternoon: false,
            ..FilterCriteria::default()
        });

        table.clear_filters();
        let once = table.clone();
        table.clear_filters();

        assert_eq!(table, once);
        assert_eq!(table.filtered_logs(), table.all_logs());
        assert_eq!(table.criteria(), &FilterCriteria::default());
    }

    #[test]
    fn test_total_pages_formula() {
        for page_size in [1usize, 3, 10, 25] {
            for count in [0usize, 1, 9, 10, 11, 25, 30] {
                let mut table = loaded(numbered_logs(count));
                table.set_page_size(page_size);
                let expected = std::cmp::max(1, (count + page_size - 1) / page_size);
                assert_eq!(table.total_pages(), expected, "count={} size={}", count, page_size);
            }
        }
    }

    #[test]
    fn test_pages_partition_filtered_set() {
        let logs = numbered_logs(23);
        let mut table = loaded(logs.clone());
        table.set_page_size(5);

        let mut seen = Vec::new();
        loop {
            let slice = table.current_page_slice();
            assert!(slice.len() <= 5);
            seen.extend_from_slice(slice);
            if !table.go_to_page(PageDirection::Next) {
                break;
            }
        }

        assert_eq!(seen, logs);
        assert_eq!(table.current_page_slice().len(), 3);
    }

    #[test]
    fn test_twenty_five_records_scenario() {
        let logs = numbered_logs(25);
        let mut table = loaded(logs.clone());

        assert_eq!(table.page_size(), 10);
        assert_eq!(table.current_page_slice(), &logs[0..10]);
        assert_eq!(table.summary(), "Page 1 of 3 (25 records)");
        assert!(!table.has_prev());
        assert!(table.has_next());

        assert!(table.go_to_page(PageDirection::Next));
        assert!(table.go_to_page(PageDirection::Next));
        assert_eq!(table.summary(), "Page 3 of 3 (25 records)");
        assert_eq!(table.current_page_slice(), &logs[20..25]);
        assert!(!table.has_next());
        assert!(table.has_prev());

        assert!(!table.go_to_page(PageDirection::Next));
        assert_eq!(table.current_page(), 3);
    }

    #[test]
    fn test_prev_is_noop_on_first_page() {
        let mut table = loaded(numbered_logs(3));
        assert!(!table.go_to_page(PageDirection::Prev));
        assert_eq!(table.current_page(), 1);
    }

    #[test]
    fn test_set_page_size_resets_page_and_rejects_zero() {
        let mut table = loaded(numbered_logs(25));
        table.go_to_page(PageDirection::Next);

        table.set_page_size(25);
        assert_eq!(table.current_page(), 1);
        assert_eq!(table.total_pages(), 1);

        table.set_page_size(0);
        assert_eq!(table.page_size(), DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn test_empty_table() {
        let table = loaded(Vec::new());
        assert_eq!(table.total_pages(), 1);
        assert_eq!(table.current_page(), 1);
        assert!(table.current_page_slice().is_empty());
        assert_eq!(table.summary(), "Page 1 of 1 (0 records)");
        assert!(!table.has_prev());
        assert!(!table.has_next());
    }
}
