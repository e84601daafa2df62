//! Modal dialogs for the users page.

use backoffice_business::{UserStatus, UsersTableState};
use backoffice_states::StateCtx;
use egui::{Ui, Window};

/// Shows the add-user dialog while the table state has it open.
///
/// Saving appends the new user and resets the form but keeps the window up,
/// so several users can be added in a row. The window's close control is the
/// only way to dismiss it.
pub fn show_add_user_modal(state_ctx: &mut StateCtx, ui: &mut Ui) {
    let state = state_ctx.state_mut::<UsersTableState>();
    let mut open = state.is_add_modal_open();

    Window::new("Add New User")
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .show(ui.ctx(), |ui| {
            {
                let form = state.form_mut();

                ui.horizontal(|ui| {
                    ui.label("Name:");
                    ui.text_edit_singleline(&mut form.name);
                });
                ui.horizontal(|ui| {
                    ui.label("Email:");
                    ui.text_edit_singleline(&mut form.email);
                });
                ui.horizontal(|ui| {
                    ui.label("Phone:");
                    ui.text_edit_singleline(&mut form.phone);
                });
                ui.horizontal(|ui| {
                    ui.label("Bio:");
                    ui.text_edit_singleline(&mut form.bio);
                });

                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    ui.label("Status:");
                    ui.radio_value(&mut form.status, UserStatus::Verified, "Verified");
                    ui.radio_value(&mut form.status, UserStatus::NotVerified, "Not verified");
                });
            }

            ui.add_space(16.0);
            if ui.button("Save").clicked() {
                let id = state.submit_add_user();
                log::debug!("AddUserModal: saved new user '{id}'");
            }
        });

    if !open {
        state.close_add_modal();
    }
}
