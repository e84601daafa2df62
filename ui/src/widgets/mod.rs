//! Reusable widgets for the dashboard shell and pages.

mod env_version;
mod sidebar;
pub mod users;

pub use env_version::env_version;
pub use sidebar::sidebar;
pub use users::users_panel;
