//! Navigation sidebar: route entries plus the theme and version footer.

use backoffice_business::Route;
use backoffice_states::StateCtx;
use egui::{Response, Ui};

use crate::widgets::env_version;

/// Renders the sidebar. The active route's entry is highlighted; clicking
/// another entry switches the page.
pub fn sidebar(state_ctx: &mut StateCtx, ui: &mut Ui) -> Response {
    ui.vertical(|ui| {
        ui.heading("Backoffice");
        ui.separator();

        let current = *state_ctx.state::<Route>();
        let mut requested: Option<Route> = None;

        for route in Route::all() {
            if ui
                .selectable_label(current == route, route.title())
                .clicked()
            {
                requested = Some(route);
            }
        }

        if let Some(route) = requested {
            log::debug!("Sidebar: navigating to {}", route.title());
            *state_ctx.state_mut::<Route>() = route;
        }

        ui.with_layout(egui::Layout::bottom_up(egui::Align::LEFT), |ui| {
            env_version(ui);
            egui::widgets::global_theme_preference_switch(ui);
        });
    })
    .response
}
