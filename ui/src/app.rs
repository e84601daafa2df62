use backoffice_business::{Route, UsersTableState};
use backoffice_states::Time;
use chrono::Utc;

use crate::{pages, state::State, widgets};

/// The dashboard application shell: sidebar navigation plus the page for
/// the active route.
pub struct BackofficeApp {
    state: State,
}

impl BackofficeApp {
    /// Called once before the first frame.
    pub fn new(state: State) -> Self {
        Self { state }
    }
}

impl eframe::App for BackofficeApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Feed the wall clock into the shared virtual clock, then flush any
        // search input whose debounce delay has elapsed.
        let now = Utc::now();
        *self.state.ctx.state_mut::<Time>().as_mut() = now;
        self.state.ctx.state_mut::<UsersTableState>().tick(now);

        egui::SidePanel::left("side_panel")
            .resizable(false)
            .default_width(160.0)
            .show(ctx, |ui| {
                widgets::sidebar(&mut self.state.ctx, ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            let route = *self.state.ctx.state::<Route>();
            match route {
                Route::Overview => pages::overview_page(&mut self.state, ui),
                Route::Users => pages::users_page(&mut self.state, ui),
            };
        });

        // A pending search is applied by `tick`, not by user input, so egui
        // must be told to paint one more frame at the debounce deadline.
        if let Some(deadline) = self.state.ctx.state::<UsersTableState>().search_deadline() {
            let wait = (deadline - now).to_std().unwrap_or_default();
            ctx.request_repaint_after(wait);
        }
    }
}
