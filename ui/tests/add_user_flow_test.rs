//! Integration tests for the add-user flow.
//!
//! The flow under test: the toolbar button opens the "Add New User" window,
//! saving appends the filled-in form to the store and resets it while the
//! window stays up, and clearing the open flag removes the window.

use backoffice_business::{UserStatus, UsersTableState};
use backoffice_states::{StateCtx, Time};
use backoffice_ui::widgets::users_panel;
use egui_kittest::Harness;
use kittest::Queryable;

fn create_state_ctx() -> StateCtx {
    let mut ctx = StateCtx::new();
    ctx.add_state(Time::default());
    ctx.add_state(UsersTableState::seeded());
    ctx
}

fn panel_harness(state_ctx: &mut StateCtx) -> Harness<'_, &mut StateCtx> {
    Harness::new_ui_state(
        |ui, state_ctx| {
            users_panel(state_ctx, ui);
        },
        state_ctx,
    )
}

/// Test the full flow: open the dialog, save a filled-in form, and see the
/// new row in the table with the form reset and the window still up.
#[test]
fn test_saving_the_form_appends_a_row_and_resets_the_form() {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut state_ctx = create_state_ctx();
    let mut harness = panel_harness(&mut state_ctx);

    harness.step();
    assert!(
        harness.query_by_label("Add New User").is_none(),
        "the dialog should be closed initially"
    );

    if let Some(add_button) = harness.query_by_label("Add User") {
        add_button.click();
    }
    harness.step();
    assert!(
        harness.query_by_label("Add New User").is_some(),
        "the dialog should open from the toolbar button"
    );

    {
        let form = harness
            .state_mut()
            .state_mut::<UsersTableState>()
            .form_mut();
        form.name = "Ada Lovelace".to_owned();
        form.email = "ada@example.com".to_owned();
        form.phone = "+254700112233".to_owned();
        form.bio = "Mathematician.".to_owned();
        form.status = UserStatus::Verified;
    }
    harness.step();

    if let Some(save) = harness.query_by_label("Save") {
        save.click();
    }
    // One step to process the click, one to render the appended row.
    harness.step();
    harness.step();

    let state = harness.state().state::<UsersTableState>();
    assert_eq!(state.store().len(), 3, "saving should append the new user");
    assert_eq!(state.form().name, "", "the form should reset after saving");
    assert!(
        state.is_add_modal_open(),
        "the dialog should stay open after saving"
    );

    assert!(
        harness.query_by_label_contains("Ada Lovelace").is_some(),
        "the new row should show up in the table"
    );
    assert_eq!(
        harness.query_all_by_label("verified").count(),
        2,
        "the new user should carry a verified badge"
    );
    assert!(
        harness.query_by_label_contains("0 of 3 selected").is_some(),
        "the footer should count the new row"
    );
}

/// Test that the dialog supports adding several users back to back.
#[test]
fn test_consecutive_saves_keep_the_dialog_open() {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut state_ctx = create_state_ctx();
    state_ctx.state_mut::<UsersTableState>().open_add_modal();
    let mut harness = panel_harness(&mut state_ctx);

    harness.step();
    for name in ["First User", "Second User"] {
        harness
            .state_mut()
            .state_mut::<UsersTableState>()
            .form_mut()
            .name = name.to_owned();
        harness.step();

        if let Some(save) = harness.query_by_label("Save") {
            save.click();
        }
        harness.step();
    }
    harness.step();

    let state = harness.state().state::<UsersTableState>();
    assert_eq!(state.store().len(), 4, "both saves should append");
    assert!(state.is_add_modal_open(), "the dialog should still be open");
    assert!(
        harness.query_by_label_contains("Second User").is_some(),
        "the last added row should be in the table"
    );
}

/// Test that clearing the open flag removes the window from the screen.
#[test]
fn test_closing_the_dialog_removes_the_window() {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut state_ctx = create_state_ctx();
    state_ctx.state_mut::<UsersTableState>().open_add_modal();
    let mut harness = panel_harness(&mut state_ctx);

    harness.step();
    assert!(harness.query_by_label("Add New User").is_some());

    harness
        .state_mut()
        .state_mut::<UsersTableState>()
        .close_add_modal();
    harness.step();

    assert!(
        harness.query_by_label("Add New User").is_none(),
        "the window should disappear once the flag is cleared"
    );
}
