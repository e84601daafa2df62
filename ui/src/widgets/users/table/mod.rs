//! Table components for the users page.
//!
//! This module contains the table rendering logic split into smaller,
//! focused components:
//! - `columns`: egui_extras column layout per visible column
//! - `header`: header row with sort toggles and the page checkbox
//! - `row`: individual row rendering dispatched over the column kinds
//! - `cells`: cell rendering functions for each column kind

mod cells;
pub mod columns;
pub mod header;
pub mod row;

pub use cells::UserAction;
