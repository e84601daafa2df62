//! Users table domain module.
//!
//! This module is the single home for:
//! - The table state stored in `StateCtx` ([`UsersTableState`])
//! - Column descriptors the widgets render from ([`ColumnSpec`])
//! - The per-frame view derivation ([`TableView`])
//! - The add-user dialog inputs ([`AddUserForm`])
//!
//! UI code under `ui/src/widgets/**` should not define table state of its
//! own. It reads via `StateCtx` and mutates through the methods on
//! [`UsersTableState`].

pub mod columns;
pub mod form;
pub mod state;
pub mod view;

pub use columns::{ColumnId, ColumnKind, ColumnSpec, SortDirection, SortSpec, user_columns};
pub use form::AddUserForm;
pub use state::{PageSelection, UsersTableState};
pub use view::TableView;
