//! Users page: heading plus the users table panel.

use egui::{Response, Ui};

use crate::state::State;
use crate::widgets;

/// Renders the user management page.
pub fn users_page(state: &mut State, ui: &mut Ui) -> Response {
    ui.vertical(|ui| {
        ui.heading("Users");
        ui.add_space(8.0);

        widgets::users_panel(&mut state.ctx, ui);
    })
    .response
}
