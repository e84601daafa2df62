//! Widgets for the users page.
//!
//! [`users_panel`] is the entry point; it composes the toolbar, the table
//! pieces from [`table`], and the add-user modal.

mod modals;
mod panel;
pub mod table;

pub use modals::show_add_user_modal;
pub use panel::users_panel;
