//! This crate contains all shared UI for the workspace.

mod repo;
pub use repo::{load_config, make_repo};

pub mod form_state;
pub mod table_state;

pub mod views;

mod navbar;
pub use navbar::Navbar;

pub mod activity_log;
pub use activity_log::{log_activity, use_activity_log, ActivityLog, LogLevel};

mod activity_log_panel;
pub use activity_log_panel::{ActivityLogPanel, ActivityLogToggle};

mod confirm_dialog;
pub use confirm_dialog::ConfirmDialog;

mod product_form;
pub use product_form::ProductForm;

mod product_table;
pub use product_table::ProductTable;
