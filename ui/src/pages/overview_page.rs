//! Overview page: heading plus a card with the most recent signups.

use backoffice_business::Route;
use backoffice_states::StateCtx;
use egui::{Response, RichText, Ui};

use crate::state::State;

/// A sample signup shown on the latest-users card.
struct LatestSignup {
    name: &'static str,
    email: &'static str,
    phone: &'static str,
    bio: &'static str,
}

/// Static rows backing the card. Presentational only; the users page works
/// off the real store.
const LATEST_SIGNUPS: [LatestSignup; 5] = [
    LatestSignup {
        name: "Daniel Orwenjo",
        email: "daniel@example.com",
        phone: "+254712345678",
        bio: "CTO at Danamo Tech.",
    },
    LatestSignup {
        name: "Maureen Wambui",
        email: "maureen@example.com",
        phone: "+254701234567",
        bio: "Project Manager.",
    },
    LatestSignup {
        name: "John Doe",
        email: "john@example.com",
        phone: "+254733445566",
        bio: "UI/UX Designer.",
    },
    LatestSignup {
        name: "Janet Muema",
        email: "janet@example.com",
        phone: "+254798765432",
        bio: "Backend Engineer.",
    },
    LatestSignup {
        name: "Extra User",
        email: "extra@example.com",
        phone: "+254700000000",
        bio: "Overflow test.",
    },
];

/// The card shows the first four rows regardless of how many exist.
const VISIBLE_SIGNUPS: usize = 4;

/// Renders the overview page.
pub fn overview_page(state: &mut State, ui: &mut Ui) -> Response {
    ui.vertical(|ui| {
        ui.heading("Overview");
        ui.add_space(12.0);

        latest_users_card(&mut state.ctx, ui);
    })
    .response
}

/// The "Latest Users" card: recent signups with a shortcut to the full table.
fn latest_users_card(state_ctx: &mut StateCtx, ui: &mut Ui) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.strong("Latest Users");
                ui.label(RichText::new("Recent signups").weak());
            });

            ui.with_layout(egui::Layout::right_to_left(egui::Align::TOP), |ui| {
                if ui.button("View All").clicked() {
                    *state_ctx.state_mut::<Route>() = Route::Users;
                }
            });
        });

        ui.separator();

        for signup in LATEST_SIGNUPS.iter().take(VISIBLE_SIGNUPS) {
            ui.horizontal(|ui| {
                ui.strong(signup.name);
                ui.label(RichText::new(signup.email).weak());
                ui.label(signup.phone);
                ui.label(RichText::new(signup.bio).weak());
            });
        }
    });
}
