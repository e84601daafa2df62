//! Row rendering for the users table.

use backoffice_business::{ColumnId, ColumnKind, ColumnSpec, UserRecord};
use egui_extras::TableRow;
use ustr::Ustr;

use super::cells::{
    UserAction, render_actions_cell, render_id_cell, render_select_cell, render_status_cell,
    render_text_cell,
};

/// Data needed to render a user row.
pub struct UserRowData<'a> {
    pub record: &'a UserRecord,
    pub selected: bool,
}

/// Result of rendering a user row.
#[derive(Default)]
pub struct UserRowResult {
    /// The row checkbox was toggled.
    pub toggle_selected: bool,
    /// An actions-menu entry was clicked.
    pub action: Option<UserAction>,
}

/// Renders one user row, one cell per visible column, dispatched over the
/// column kinds.
#[inline]
pub fn render_user_row(
    row: &mut TableRow<'_, '_>,
    specs: &[ColumnSpec],
    data: &UserRowData<'_>,
) -> UserRowResult {
    let mut result = UserRowResult::default();

    for spec in specs {
        row.col(|ui| match spec.kind {
            ColumnKind::Checkbox => {
                if render_select_cell(ui, data.selected) {
                    result.toggle_selected = true;
                }
            }
            ColumnKind::Text => {
                let text = spec.id.sort_value(data.record).unwrap_or_default();
                if spec.id == ColumnId::Id {
                    render_id_cell(ui, text);
                } else {
                    render_text_cell(ui, text);
                }
            }
            ColumnKind::Badge => render_status_cell(ui, data.record.status),
            ColumnKind::Action => {
                if let Some(action) = render_actions_cell(ui, Ustr::from(&data.record.id)) {
                    result.action = Some(action);
                }
            }
        });
    }

    result
}
