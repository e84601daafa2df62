use backoffice_business::{Route, UsersTableState};
use backoffice_states::{StateCtx, Time};

/// The main application state.
///
/// Everything the widgets read or mutate is registered in the [`StateCtx`];
/// the app shell only owns the container.
pub struct State {
    /// The state context for client logic.
    pub ctx: StateCtx,
}

impl Default for State {
    fn default() -> Self {
        Self::with_table(UsersTableState::seeded())
    }
}

impl State {
    /// State built around a specific users table, for tests that bring
    /// their own rows.
    pub fn with_table(table: UsersTableState) -> Self {
        let mut ctx = StateCtx::new();

        ctx.add_state(Time::default());
        ctx.add_state(Route::default());
        ctx.add_state(table);

        Self { ctx }
    }
}
