pub mod dose_history;
pub mod dose_log_table;
pub mod filter_panel;
pub mod navbar;
pub mod pagination_controls;
pub mod repeat_controls;
pub mod schedule_form;
pub mod toast;

pub use dose_history::DoseHistory;
pub use navbar::Navbar;
pub use schedule_form::ScheduleFormSection;
pub use toast::ToastHost;
