pub mod use_dose_logs;
pub mod use_dose_schedule;
pub mod use_toasts;
