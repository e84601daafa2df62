//! State for the users page table.
//!
//! This lives in `backoffice_business` so the UI stays "dumb": widgets read
//! the state, render, and dispatch mutations back through the methods here.
//! Nothing in this file draws or performs I/O.
//!
//! The search box is debounced: keystrokes land in `search_input`
//! immediately, but the filter only ever sees values that survived the
//! debounce delay. Time always comes in as a `now` parameter so tests can
//! drive the clock through `backoffice_states::Time`.

use std::any::Any;
use std::collections::BTreeSet;

use backoffice_states::State;
use chrono::{DateTime, Utc};
use log::debug;
use rand::Rng;

use crate::config::TableConfig;
use crate::debounce::{DebounceToken, Debouncer};
use crate::filter::filter_users;
use crate::users::{UserRecord, UserStore, generate_user_id};
use crate::users_table::columns::{ColumnId, ColumnSpec, SortSpec, user_columns};
use crate::users_table::form::AddUserForm;
use crate::users_table::view::TableView;

/// Selection summary of the current page, for the header checkbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageSelection {
    /// No row on the page is selected. Empty pages read as this.
    None,
    /// Some rows on the page are selected, but not all of them.
    Partial,
    /// Every row on the page is selected.
    Full,
}

/// State for the users table.
///
/// Stored in `StateCtx` and accessed via `state_mut::<UsersTableState>()`.
#[derive(Debug)]
pub struct UsersTableState {
    /// Page size and debounce delay.
    config: TableConfig,

    /// Every user record, insertion order, append-only.
    store: UserStore,

    /// Raw search input, updated on every keystroke.
    search_input: String,

    /// The search text the filter actually runs on. Lags `search_input` by
    /// the debounce delay.
    applied_search: String,

    /// Pending debounced search update, at most one at a time.
    search_debounce: Debouncer<String>,

    /// Active sort. `None` keeps insertion order.
    sort: Option<SortSpec>,

    /// Columns hidden through the columns menu.
    hidden_columns: BTreeSet<ColumnId>,

    /// Requested zero-based page. Clamped against the filtered set on every
    /// [`view`](Self::view).
    page: usize,

    /// Ids of selected rows. Keyed by record id, so a selection survives
    /// sorting and paging.
    selected: BTreeSet<String>,

    /// Whether the add-user dialog is open.
    add_modal_open: bool,

    /// Inputs of the add-user dialog.
    form: AddUserForm,
}

impl Default for UsersTableState {
    fn default() -> Self {
        Self::new(TableConfig::default())
    }
}

impl State for UsersTableState {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

impl UsersTableState {
    /// Empty table with the given knobs.
    pub fn new(config: TableConfig) -> Self {
        Self::with_store(UserStore::new(), config)
    }

    /// Table pre-populated with the demo rows.
    pub fn seeded() -> Self {
        Self::with_store(UserStore::seeded(), TableConfig::default())
    }

    pub fn with_store(store: UserStore, config: TableConfig) -> Self {
        Self {
            search_debounce: Debouncer::new(config.search_debounce),
            config,
            store,
            search_input: String::new(),
            applied_search: String::new(),
            sort: None,
            hidden_columns: BTreeSet::new(),
            page: 0,
            selected: BTreeSet::new(),
            add_modal_open: false,
            form: AddUserForm::new(),
        }
    }

    // =====================
    // Search
    // =====================

    /// Records a keystroke in the search box.
    ///
    /// The filter does not run yet: the value is scheduled behind the
    /// debounce delay, replacing whatever was pending, and gets applied by
    /// the first [`tick`](Self::tick) past the deadline.
    pub fn set_search_input(
        &mut self,
        input: impl Into<String>,
        now: DateTime<Utc>,
    ) -> DebounceToken {
        self.search_input = input.into();
        self.search_debounce
            .schedule(self.search_input.clone(), now)
    }

    /// Drops the pending search update if `token` is still the live one.
    pub fn cancel_search(&mut self, token: DebounceToken) {
        self.search_debounce.cancel(token);
    }

    /// Applies a debounced search value whose delay has elapsed.
    ///
    /// Returns `true` when the applied filter changed. A changed filter also
    /// resets the page: the old page position is meaningless against a new
    /// filtered set.
    pub fn tick(&mut self, now: DateTime<Utc>) -> bool {
        let Some(applied) = self.search_debounce.poll(now) else {
            return false;
        };
        if applied == self.applied_search {
            return false;
        }
        debug!("UsersTable: applying search filter '{}'", applied);
        self.applied_search = applied;
        self.page = 0;
        true
    }

    pub fn search_input(&self) -> &str {
        &self.search_input
    }

    pub fn applied_search(&self) -> &str {
        &self.applied_search
    }

    pub fn is_search_pending(&self) -> bool {
        self.search_debounce.is_pending()
    }

    /// Deadline of the pending search update, if any. The UI schedules a
    /// repaint for this instant instead of polling every frame.
    pub fn search_deadline(&self) -> Option<DateTime<Utc>> {
        self.search_debounce.deadline()
    }

    // =====================
    // Sort
    // =====================

    /// Cycles sorting for `column`: a new column starts ascending, the same
    /// column flips direction. Clicks on non-sortable columns are ignored.
    pub fn toggle_sort(&mut self, column: ColumnId) {
        if !user_columns().iter().any(|c| c.id == column && c.sortable) {
            return;
        }
        self.sort = match self.sort {
            Some(spec) if spec.column == column => Some(SortSpec {
                column,
                direction: spec.direction.toggled(),
            }),
            _ => Some(SortSpec::ascending(column)),
        };
    }

    /// Back to insertion order.
    pub fn clear_sort(&mut self) {
        self.sort = None;
    }

    pub fn sort_spec(&self) -> Option<SortSpec> {
        self.sort
    }

    // =====================
    // Column visibility
    // =====================

    /// Hides or shows a column. Non-hideable columns are left alone.
    pub fn set_column_visible(&mut self, column: ColumnId, visible: bool) {
        if !user_columns().iter().any(|c| c.id == column && c.hideable) {
            return;
        }
        if visible {
            self.hidden_columns.remove(&column);
        } else {
            self.hidden_columns.insert(column);
        }
    }

    pub fn is_column_visible(&self, column: ColumnId) -> bool {
        !self.hidden_columns.contains(&column)
    }

    /// Columns to render, in display order, with hidden ones removed.
    pub fn visible_columns(&self) -> Vec<ColumnSpec> {
        user_columns()
            .into_iter()
            .filter(|c| self.is_column_visible(c.id))
            .collect()
    }

    // =====================
    // Pagination
    // =====================

    /// Requests a page. The value is clamped by [`view`](Self::view), so
    /// callers may pass `view.page + 1` or `view.page - 1` unchecked.
    pub fn set_page(&mut self, page: usize) {
        self.page = page;
    }

    // =====================
    // Selection
    // =====================

    pub fn toggle_selected(&mut self, id: &str) {
        if !self.selected.remove(id) {
            self.selected.insert(id.to_owned());
        }
    }

    pub fn set_selected(&mut self, id: &str, selected: bool) {
        if selected {
            self.selected.insert(id.to_owned());
        } else {
            self.selected.remove(id);
        }
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.contains(id)
    }

    /// Selects or clears every row on the current page, for the header
    /// checkbox. Rows on other pages keep their selection.
    pub fn set_page_selected(&mut self, selected: bool) {
        let ids: Vec<String> = self.view().rows.iter().map(|r| r.id.clone()).collect();
        for id in ids {
            self.set_selected(&id, selected);
        }
    }

    /// Whether every row on the current page is selected. An empty page
    /// counts as unselected.
    pub fn page_fully_selected(&self) -> bool {
        self.page_selection() == PageSelection::Full
    }

    /// Selection summary of the current page. The header checkbox renders
    /// checked for [`PageSelection::Full`] and an indeterminate mark for
    /// [`PageSelection::Partial`].
    pub fn page_selection(&self) -> PageSelection {
        let view = self.view();
        let selected = view
            .rows
            .iter()
            .filter(|row| self.is_selected(&row.id))
            .count();

        if selected == 0 {
            PageSelection::None
        } else if selected == view.rows.len() {
            PageSelection::Full
        } else {
            PageSelection::Partial
        }
    }

    // =====================
    // Add-user dialog
    // =====================

    pub fn open_add_modal(&mut self) {
        self.add_modal_open = true;
    }

    /// Closes the dialog. Half-typed inputs are kept for the next open; only
    /// a successful save resets them.
    pub fn close_add_modal(&mut self) {
        self.add_modal_open = false;
    }

    pub fn is_add_modal_open(&self) -> bool {
        self.add_modal_open
    }

    pub fn form(&self) -> &AddUserForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut AddUserForm {
        &mut self.form
    }

    /// Appends a new user built from the dialog inputs and returns its
    /// generated id.
    ///
    /// The form resets to its defaults so the dialog is ready for the next
    /// entry, and the table jumps back to the first page. The new record is
    /// immediately visible to filtering, sorting, and paging.
    pub fn submit_add_user_with<R: Rng>(&mut self, rng: &mut R) -> String {
        let id = generate_user_id(rng);
        debug!("UsersTable: adding user '{}'", id);
        self.store.push(self.form.to_record(id.clone()));
        self.form.reset();
        self.page = 0;
        id
    }

    /// [`submit_add_user_with`](Self::submit_add_user_with) on the
    /// thread-local generator.
    pub fn submit_add_user(&mut self) -> String {
        self.submit_add_user_with(&mut rand::thread_rng())
    }

    // =====================
    // Derivations
    // =====================

    pub fn store(&self) -> &UserStore {
        &self.store
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    /// The records the applied search matches, in insertion order.
    pub fn filtered(&self) -> Vec<&UserRecord> {
        filter_users(self.store.records(), &self.applied_search)
    }

    /// Computes everything the table widget needs for this frame.
    pub fn view(&self) -> TableView<'_> {
        TableView::compute(
            self.filtered(),
            self.sort,
            self.page,
            self.config.page_size,
            &self.selected,
        )
    }
}
