//! Main panel for the users page: toolbar, table, and pagination footer.
//!
//! The panel never mutates state while the table borrows it for rendering:
//! interactions are collected during the pass and applied at the end of the
//! frame, so every control observes one consistent view.

use backoffice_business::{ColumnId, UsersTableState, user_columns};
use backoffice_states::{StateCtx, Time};
use egui::{Response, TextEdit, Ui};
use egui_extras::TableBuilder;

use super::modals::show_add_user_modal;
use super::table::UserAction;
use super::table::columns::{HEADER_HEIGHT, ROW_HEIGHT, table_columns};
use super::table::header::{HeaderAction, render_table_header};
use super::table::row::{UserRowData, render_user_row};

/// Displays the users table with its toolbar and pagination footer.
pub fn users_panel(state_ctx: &mut StateCtx, ui: &mut Ui) -> Response {
    let now = *state_ctx.state::<Time>().as_ref();

    let response = ui.vertical(|ui| {
        let state = state_ctx.state_mut::<UsersTableState>();

        // Toolbar row: search box, columns menu, add-user button.
        let mut search = state.search_input().to_owned();
        let mut search_changed = false;
        let mut column_toggle: Option<(ColumnId, bool)> = None;
        let mut should_open_add = false;

        ui.horizontal(|ui| {
            search_changed = ui
                .add(
                    TextEdit::singleline(&mut search)
                        .hint_text("Search by email or UID...")
                        .desired_width(220.0),
                )
                .changed();

            ui.menu_button("Columns", |ui| {
                for spec in user_columns().into_iter().filter(|c| c.hideable) {
                    let mut visible = state.is_column_visible(spec.id);
                    if ui.checkbox(&mut visible, spec.title).changed() {
                        column_toggle = Some((spec.id, visible));
                    }
                }
            });

            should_open_add = ui.button("Add User").clicked();
        });

        if search_changed {
            state.set_search_input(search, now);
        }
        if let Some((column, visible)) = column_toggle {
            state.set_column_visible(column, visible);
        }
        if should_open_add {
            state.open_add_modal();
        }

        ui.add_space(8.0);

        // Interactions collected during the table pass, applied after it.
        let mut header_action: Option<HeaderAction> = None;
        let mut toggled_row: Option<String> = None;
        let mut user_action: Option<UserAction> = None;
        let mut page_request: Option<usize> = None;

        let specs = state.visible_columns();
        let sort = state.sort_spec();
        let page_selection = state.page_selection();
        let view = state.view();
        let selected_flags: Vec<bool> =
            view.rows.iter().map(|r| state.is_selected(&r.id)).collect();

        let mut builder = TableBuilder::new(ui)
            .id_salt("users_table")
            .striped(true)
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center));
        for column in table_columns(&specs) {
            builder = builder.column(column);
        }

        builder
            .header(HEADER_HEIGHT, |mut header| {
                header_action = render_table_header(&mut header, &specs, sort, page_selection);
            })
            .body(|mut body| {
                if view.rows.is_empty() {
                    body.row(ROW_HEIGHT, |mut row| {
                        row.col(|_ui| {});
                        row.col(|ui| {
                            ui.label("No users found.");
                        });
                    });
                } else {
                    body.rows(ROW_HEIGHT, view.rows.len(), |mut row| {
                        let index = row.index();
                        let data = UserRowData {
                            record: view.rows[index],
                            selected: selected_flags[index],
                        };

                        let result = render_user_row(&mut row, &specs, &data);
                        if result.toggle_selected {
                            toggled_row = Some(data.record.id.clone());
                        }
                        if let Some(action) = result.action {
                            user_action = Some(action);
                        }
                    });
                }
            });

        ui.add_space(8.0);

        // Pagination footer.
        ui.horizontal(|ui| {
            ui.label(format!(
                "{} of {} selected",
                view.selected_count, view.filtered_count
            ));
            ui.separator();
            if ui
                .add_enabled(view.has_prev, egui::Button::new("Previous"))
                .clicked()
            {
                page_request = Some(view.page - 1);
            }
            if ui
                .add_enabled(view.has_next, egui::Button::new("Next"))
                .clicked()
            {
                page_request = Some(view.page + 1);
            }
        });

        // Apply collected interactions now that the view borrow is gone.
        match header_action {
            Some(HeaderAction::ToggleSort(column)) => state.toggle_sort(column),
            Some(HeaderAction::SetPageSelected(selected)) => state.set_page_selected(selected),
            None => {}
        }
        if let Some(id) = toggled_row {
            state.toggle_selected(&id);
        }
        if let Some(page) = page_request {
            state.set_page(page);
        }
        if let Some(action) = user_action {
            handle_user_action(action, ui.ctx());
        }
    });

    // Add-user modal, rendered on top of the panel.
    if state_ctx.state::<UsersTableState>().is_add_modal_open() {
        show_add_user_modal(state_ctx, ui);
    }

    response.response
}

/// Handles a clicked actions-menu entry.
fn handle_user_action(action: UserAction, ctx: &egui::Context) {
    match action {
        UserAction::CopyId(id) => {
            log::debug!("UsersPanel: copying id '{id}'");
            ctx.copy_text(id.to_string());
        }
        UserAction::ViewProfile(id) => log::info!("UsersPanel: view profile for '{id}'"),
        UserAction::SendMessage(id) => log::info!("UsersPanel: send message to '{id}'"),
    }
}
