//! Engine defaults for the users table.

use chrono::Duration;

/// Rows per page.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// How long the search input must be stable before the filter runs.
pub const SEARCH_DEBOUNCE_MS: i64 = 300;

/// Tuning knobs for the users table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableConfig {
    pub page_size: usize,
    pub search_debounce: Duration,
}

impl TableConfig {
    pub fn new(page_size: usize, search_debounce: Duration) -> Self {
        Self {
            page_size,
            search_debounce,
        }
    }
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            search_debounce: Duration::milliseconds(SEARCH_DEBOUNCE_MS),
        }
    }
}
