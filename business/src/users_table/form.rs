//! Input state for the add-user dialog.

use crate::users::{UserRecord, UserStatus};

/// Field values of the add-user dialog.
///
/// Same shape as [`UserRecord`] minus the identifier, which is generated on
/// submit. No validation beyond what the widgets enforce: the dialog accepts
/// whatever the operator typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddUserForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub bio: String,
    /// Defaults to not-verified, like every freshly added user.
    pub status: UserStatus,
}

impl AddUserForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the record to append, pairing the inputs with `id`.
    pub fn to_record(&self, id: String) -> UserRecord {
        UserRecord {
            id,
            name: self.name.clone(),
            email: self.email.clone(),
            status: self.status,
            phone: self.phone.clone(),
            bio: self.bio.clone(),
        }
    }

    /// Clears every field back to its default.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
