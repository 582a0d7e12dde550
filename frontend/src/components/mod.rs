pub mod availability;
pub mod preset_modal;
pub mod reset_settings;
pub mod tracker_summary;
