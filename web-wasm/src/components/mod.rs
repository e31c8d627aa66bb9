//! UI components

pub mod appointments;
pub mod dashboard;
pub mod diagnosis;
pub mod home;
pub mod medical_history;
pub mod navbar;
pub mod progress_bar;
pub mod results_panel;
pub mod upload_area;
