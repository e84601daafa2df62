//! Column descriptors for the users table.
//!
//! Columns are described by a static [`ColumnSpec`] rather than closures, so
//! the rendering side can stay a plain `match` on [`ColumnKind`] and the sort
//! comparator a `match` on [`ColumnId`].

use crate::users::UserRecord;

/// Identifies one column of the users table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ColumnId {
    /// Row-selection checkboxes.
    Select,
    /// The generated `uNNNN` identifier, shown as `UID`.
    Id,
    /// Display name.
    Name,
    /// Email address.
    Email,
    /// Verification badge.
    Status,
    /// Phone number.
    Phone,
    /// Free-text bio.
    Bio,
    /// Per-row actions menu.
    Actions,
}

impl ColumnId {
    /// The record field this column sorts on, if it is backed by one.
    ///
    /// `Select` and `Actions` are synthetic columns with no field behind
    /// them, so they return `None` and can never participate in sorting.
    pub fn sort_value(self, record: &UserRecord) -> Option<&str> {
        match self {
            Self::Id => Some(&record.id),
            Self::Name => Some(&record.name),
            Self::Email => Some(&record.email),
            Self::Status => Some(record.status.label()),
            Self::Phone => Some(&record.phone),
            Self::Bio => Some(&record.bio),
            Self::Select | Self::Actions => None,
        }
    }
}

/// How cells of a column are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    /// A checkbox per row; the header checkbox selects the visible page.
    Checkbox,
    /// Plain text pulled from the record.
    Text,
    /// Colored verification badge.
    Badge,
    /// A menu button with per-row actions.
    Action,
}

/// Static description of one table column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSpec {
    pub id: ColumnId,
    pub kind: ColumnKind,
    /// Header label. Empty for columns whose header is a control or blank.
    pub title: &'static str,
    /// Whether clicking the header toggles sorting on this column.
    pub sortable: bool,
    /// Whether the columns menu may hide this column.
    pub hideable: bool,
}

/// The users-table columns, in display order.
pub const fn user_columns() -> [ColumnSpec; 8] {
    [
        ColumnSpec {
            id: ColumnId::Select,
            kind: ColumnKind::Checkbox,
            title: "",
            sortable: false,
            hideable: false,
        },
        ColumnSpec {
            id: ColumnId::Id,
            kind: ColumnKind::Text,
            title: "UID",
            sortable: true,
            hideable: true,
        },
        ColumnSpec {
            id: ColumnId::Name,
            kind: ColumnKind::Text,
            title: "Name",
            sortable: true,
            hideable: true,
        },
        ColumnSpec {
            id: ColumnId::Email,
            kind: ColumnKind::Text,
            title: "Email",
            sortable: true,
            hideable: true,
        },
        ColumnSpec {
            id: ColumnId::Status,
            kind: ColumnKind::Badge,
            title: "Status",
            sortable: true,
            hideable: true,
        },
        ColumnSpec {
            id: ColumnId::Phone,
            kind: ColumnKind::Text,
            title: "Phone",
            sortable: true,
            hideable: true,
        },
        ColumnSpec {
            id: ColumnId::Bio,
            kind: ColumnKind::Text,
            title: "Bio",
            sortable: true,
            hideable: true,
        },
        ColumnSpec {
            id: ColumnId::Actions,
            kind: ColumnKind::Action,
            title: "",
            sortable: false,
            hideable: false,
        },
    ]
}

/// Sort direction for a sortable column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// An active sort: which column and which way.
///
/// "No sort at all" is represented by `Option<SortSpec>` on the table state;
/// in that case rows keep insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    pub column: ColumnId,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn ascending(column: ColumnId) -> Self {
        Self {
            column,
            direction: SortDirection::Ascending,
        }
    }
}
