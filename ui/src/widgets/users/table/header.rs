//! Table header rendering for the users table.

use backoffice_business::{ColumnId, ColumnSpec, PageSelection, SortDirection, SortSpec};
use egui::{Checkbox, RichText, Ui};
use egui_extras::TableRow;

/// What the user did in the header row this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderAction {
    /// A sortable column title was clicked.
    ToggleSort(ColumnId),
    /// The page checkbox was toggled.
    SetPageSelected(bool),
}

/// Renders the header row: the page checkbox, sort-toggle buttons for
/// sortable columns, and plain labels for the rest.
///
/// Returns the interaction to apply, if any.
#[inline]
pub fn render_table_header(
    header: &mut TableRow<'_, '_>,
    specs: &[ColumnSpec],
    sort: Option<SortSpec>,
    page_selection: PageSelection,
) -> Option<HeaderAction> {
    let mut action = None;

    for spec in specs {
        header.col(|ui| {
            if let Some(cell_action) = render_header_cell(ui, spec, sort, page_selection) {
                action = Some(cell_action);
            }
        });
    }

    action
}

#[inline]
fn render_header_cell(
    ui: &mut Ui,
    spec: &ColumnSpec,
    sort: Option<SortSpec>,
    page_selection: PageSelection,
) -> Option<HeaderAction> {
    if spec.id == ColumnId::Select {
        let (mut checked, indeterminate) = page_checkbox_flags(page_selection);
        if ui
            .add(Checkbox::new(&mut checked, "").indeterminate(indeterminate))
            .changed()
        {
            return Some(HeaderAction::SetPageSelected(checked));
        }
        return None;
    }

    if spec.sortable {
        let clicked = ui
            .centered_and_justified(|ui| {
                ui.button(RichText::new(sort_label(spec, sort)).strong())
                    .clicked()
            })
            .inner;
        return clicked.then_some(HeaderAction::ToggleSort(spec.id));
    }

    ui.centered_and_justified(|ui| {
        ui.strong(spec.title);
    });
    None
}

/// Page checkbox flags as `(checked, indeterminate)`.
///
/// A partially selected page shows the indeterminate mark while reading as
/// unchecked, so the next click selects the whole page rather than clearing
/// the stragglers.
#[inline]
fn page_checkbox_flags(selection: PageSelection) -> (bool, bool) {
    match selection {
        PageSelection::None => (false, false),
        PageSelection::Partial => (false, true),
        PageSelection::Full => (true, false),
    }
}

/// Title plus a direction arrow when this column drives the active sort.
#[inline]
fn sort_label(spec: &ColumnSpec, sort: Option<SortSpec>) -> String {
    match sort {
        Some(active) if active.column == spec.id => match active.direction {
            SortDirection::Ascending => format!("{} ⬆", spec.title),
            SortDirection::Descending => format!("{} ⬇", spec.title),
        },
        _ => spec.title.to_owned(),
    }
}
