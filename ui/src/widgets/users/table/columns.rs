//! Column layout for the users table.

use backoffice_business::{ColumnId, ColumnSpec};
use egui_extras::Column;

/// Fixed column widths for consistent table layout
pub const SELECT_WIDTH: f32 = 28.0;
pub const ID_WIDTH: f32 = 64.0;
pub const STATUS_WIDTH: f32 = 96.0;
pub const PHONE_WIDTH: f32 = 120.0;
pub const ACTIONS_WIDTH: f32 = 36.0;
pub const ROW_HEIGHT: f32 = 30.0;
pub const HEADER_HEIGHT: f32 = 24.0;

/// Maps the visible column descriptors to egui_extras columns, in order.
///
/// Control and short-value columns get a fixed width; name, email, and bio
/// share the remaining space.
#[inline]
pub fn table_columns(specs: &[ColumnSpec]) -> Vec<Column> {
    specs
        .iter()
        .map(|spec| match spec.id {
            ColumnId::Select => Column::exact(SELECT_WIDTH),
            ColumnId::Id => Column::exact(ID_WIDTH),
            ColumnId::Name => Column::remainder().at_least(100.0),
            ColumnId::Email => Column::remainder().at_least(140.0),
            ColumnId::Status => Column::exact(STATUS_WIDTH),
            ColumnId::Phone => Column::exact(PHONE_WIDTH),
            ColumnId::Bio => Column::remainder().at_least(100.0),
            ColumnId::Actions => Column::exact(ACTIONS_WIDTH),
        })
        .collect()
}
