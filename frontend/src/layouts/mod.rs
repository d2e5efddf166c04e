pub mod dashboard_layout;
pub mod main_layout;
