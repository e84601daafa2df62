//! Cell rendering functions for the users table.
//!
//! Each function renders a specific type of cell content with
//! centered alignment and appropriate styling.

use backoffice_business::UserStatus;
use egui::{Color32, RichText, Ui};
use ustr::Ustr;

/// A clicked entry of the per-row actions menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserAction {
    CopyId(Ustr),
    ViewProfile(Ustr),
    SendMessage(Ustr),
}

/// Badge color for verified users.
const VERIFIED_COLOR: Color32 = Color32::from_rgb(34, 139, 34);

/// Dimmed badge color for users pending verification.
const NOT_VERIFIED_COLOR: Color32 = Color32::from_rgb(130, 130, 130);

/// Renders the row-selection checkbox.
///
/// Returns `true` if the checkbox was toggled.
#[inline]
pub fn render_select_cell(ui: &mut Ui, selected: bool) -> bool {
    let mut checked = selected;
    ui.centered_and_justified(|ui| ui.checkbox(&mut checked, "").changed())
        .inner
}

/// Renders the generated identifier in monospace.
#[inline]
pub fn render_id_cell(ui: &mut Ui, id: &str) {
    ui.centered_and_justified(|ui| {
        ui.label(RichText::new(id).monospace());
    });
}

/// Renders a plain text cell.
#[inline]
pub fn render_text_cell(ui: &mut Ui, text: &str) {
    ui.centered_and_justified(|ui| {
        ui.label(text);
    });
}

/// Renders the verification badge: green for verified, dimmed otherwise.
#[inline]
pub fn render_status_cell(ui: &mut Ui, status: UserStatus) {
    let color = if status.is_verified() {
        VERIFIED_COLOR
    } else {
        NOT_VERIFIED_COLOR
    };

    ui.centered_and_justified(|ui| {
        ui.label(RichText::new(status.label()).color(color));
    });
}

/// Renders the per-row actions menu.
///
/// Returns the entry that was clicked, if any.
#[inline]
pub fn render_actions_cell(ui: &mut Ui, id: Ustr) -> Option<UserAction> {
    let mut action = None;

    ui.centered_and_justified(|ui| {
        ui.menu_button("⋮", |ui| {
            if ui.button("Copy User ID").clicked() {
                action = Some(UserAction::CopyId(id));
            }
            if ui.button("View Profile").clicked() {
                action = Some(UserAction::ViewProfile(id));
            }
            if ui.button("Send Message").clicked() {
                action = Some(UserAction::SendMessage(id));
            }
        });
    });

    action
}
