//! Core dashboard logic: user records, search filtering, debounce, and the
//! tabular view engine.
//!
//! This crate stays "dumb" about presentation:
//! - UI reads state and renders
//! - UI dispatches mutations back through the state types defined here
//! - Nothing in this crate performs I/O or touches egui
//!
//! Time-dependent pieces (the search debounce) take `now` as a parameter so
//! tests can drive the clock through `backoffice_states::Time`.

#![warn(clippy::all, rust_2018_idioms)]

mod config;
mod debounce;
mod filter;
mod route;
mod users;
mod users_table;

pub use config::{DEFAULT_PAGE_SIZE, SEARCH_DEBOUNCE_MS, TableConfig};
pub use debounce::{DebounceToken, Debouncer};
pub use filter::filter_users;
pub use route::Route;
pub use users::{USER_ID_SPACE, UserRecord, UserStatus, UserStore, generate_user_id};
pub use users_table::{
    AddUserForm, ColumnId, ColumnKind, ColumnSpec, PageSelection, SortDirection, SortSpec,
    TableView, UsersTableState, user_columns,
};
