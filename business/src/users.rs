//! User records and the append-only store backing the users table.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Verification status of a dashboard user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserStatus {
    #[serde(rename = "verified")]
    Verified,
    #[default]
    #[serde(rename = "not-verified")]
    NotVerified,
}

impl UserStatus {
    /// Display label, as shown inside the status badge.
    pub fn label(self) -> &'static str {
        match self {
            Self::Verified => "verified",
            Self::NotVerified => "not verified",
        }
    }

    pub fn is_verified(self) -> bool {
        self == Self::Verified
    }
}

/// A single row of the users table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Table-local identifier, e.g. `u1234`. Unique within the store in
    /// practice; see [`generate_user_id`] for the actual guarantee.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Email address. One of the two fields the search filter looks at.
    pub email: String,
    /// Verification status.
    pub status: UserStatus,
    /// Phone number, free-form.
    pub phone: String,
    /// Free-text bio.
    pub bio: String,
}

/// Append-only, insertion-ordered collection of user records.
///
/// Owned by the users-table state for its lifetime; there is no update or
/// delete, and nothing outside the table mutates it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserStore {
    records: Vec<UserRecord>,
}

impl UserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: Vec<UserRecord>) -> Self {
        Self { records }
    }

    /// Store pre-populated with the demo rows the dashboard ships with.
    pub fn seeded() -> Self {
        Self {
            records: vec![
                UserRecord {
                    id: "u1234".to_owned(),
                    name: "Daniel Orwenjo".to_owned(),
                    email: "daniel@example.com".to_owned(),
                    status: UserStatus::Verified,
                    phone: "+254712345678".to_owned(),
                    bio: "Lead developer at Danamo Tech.".to_owned(),
                },
                UserRecord {
                    id: "u2453".to_owned(),
                    name: "Janet Mueni".to_owned(),
                    email: "Janet@example.com".to_owned(),
                    status: UserStatus::NotVerified,
                    phone: "+254798765432".to_owned(),
                    bio: "Marketing specialist.".to_owned(),
                },
            ],
        }
    }

    /// Appends `record`, keeping insertion order.
    pub fn push(&mut self, record: UserRecord) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[UserRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn contains_id(&self, id: &str) -> bool {
        self.records.iter().any(|record| record.id == id)
    }
}

/// Size of the random space used for generated identifiers.
pub const USER_ID_SPACE: u32 = 10_000;

/// Generates a table-local user identifier: `u` followed by a random number
/// below [`USER_ID_SPACE`].
///
/// Collisions are possible and accepted; the store holds a handful of rows
/// added interactively, and the product never promised global uniqueness.
pub fn generate_user_id<R: Rng>(rng: &mut R) -> String {
    format!("u{}", rng.gen_range(0..USER_ID_SPACE))
}
