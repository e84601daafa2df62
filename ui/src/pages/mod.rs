//! Pages module for the application.
//!
//! This module contains the pages the sidebar routes between:
//! - `overview_page`: landing page with the latest-users card
//! - `users_page`: user management table

mod overview_page;
mod users_page;

pub use overview_page::overview_page;
pub use users_page::users_page;
