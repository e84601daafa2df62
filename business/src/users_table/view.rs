//! Derivation of the rendered page from filter, sort, and selection state.

use std::collections::BTreeSet;

use crate::users::UserRecord;
use crate::users_table::columns::{SortDirection, SortSpec};

/// Everything the table widget needs for one render pass.
///
/// Computed fresh from [`UsersTableState`](super::UsersTableState) each
/// frame; it never feeds back into the store.
#[derive(Debug, PartialEq, Eq)]
pub struct TableView<'a> {
    /// Rows of the current page, in display order.
    pub rows: Vec<&'a UserRecord>,
    /// Zero-based page actually shown. May be lower than the requested page
    /// when the filtered set shrank.
    pub page: usize,
    /// Total pages for the filtered set. Zero when nothing matches.
    pub page_count: usize,
    /// Whether a previous page exists.
    pub has_prev: bool,
    /// Whether a next page exists.
    pub has_next: bool,
    /// Selected rows among the filtered set only.
    pub selected_count: usize,
    /// Size of the whole filtered set.
    pub filtered_count: usize,
}

impl<'a> TableView<'a> {
    /// Sorts, pages, and counts `filtered`.
    ///
    /// The requested `page` is clamped to the last page of the filtered set,
    /// so a stale page index from before a filter change is harmless.
    pub(crate) fn compute(
        filtered: Vec<&'a UserRecord>,
        sort: Option<SortSpec>,
        page: usize,
        page_size: usize,
        selected: &BTreeSet<String>,
    ) -> Self {
        // Filtering, sorting, and paging are total: a zero page size would
        // divide by zero, so treat it as one.
        let page_size = page_size.max(1);

        let filtered_count = filtered.len();
        let selected_count = filtered
            .iter()
            .filter(|record| selected.contains(&record.id))
            .count();

        let ordered = match sort {
            Some(spec) => sort_rows(filtered, spec),
            None => filtered,
        };

        let page_count = filtered_count.div_ceil(page_size);
        let page = if page_count == 0 {
            0
        } else {
            page.min(page_count - 1)
        };

        let rows: Vec<&UserRecord> = ordered
            .into_iter()
            .skip(page * page_size)
            .take(page_size)
            .collect();

        Self {
            rows,
            page,
            page_count,
            has_prev: page > 0,
            has_next: page + 1 < page_count,
            selected_count,
            filtered_count,
        }
    }
}

/// Stable sort on the column's lowercased value.
///
/// Descending flips the comparator rather than reversing the result, so rows
/// with equal keys keep insertion order in both directions. Re-sorting an
/// already sorted set is therefore a no-op, and toggling the direction twice
/// restores the original order.
fn sort_rows(rows: Vec<&UserRecord>, spec: SortSpec) -> Vec<&UserRecord> {
    let mut keyed: Vec<(String, &UserRecord)> = rows
        .into_iter()
        .map(|record| {
            let key = spec
                .column
                .sort_value(record)
                .unwrap_or_default()
                .to_lowercase();
            (key, record)
        })
        .collect();

    match spec.direction {
        SortDirection::Ascending => keyed.sort_by(|a, b| a.0.cmp(&b.0)),
        SortDirection::Descending => keyed.sort_by(|a, b| b.0.cmp(&a.0)),
    }

    keyed.into_iter().map(|(_, record)| record).collect()
}
