//! Search filter for the users table.

use crate::UserRecord;

/// Returns the records whose email or identifier contains `query`,
/// case-insensitively, preserving the input order.
///
/// The empty query matches everything. Name, phone and bio are not
/// searched; the search box is scoped to "email or UID".
pub fn filter_users<'a>(records: &'a [UserRecord], query: &str) -> Vec<&'a UserRecord> {
    if query.is_empty() {
        return records.iter().collect();
    }

    let needle = query.to_lowercase();
    records
        .iter()
        .filter(|record| {
            record.email.to_lowercase().contains(&needle)
                || record.id.to_lowercase().contains(&needle)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::UserStatus;

    fn record(id: &str, name: &str, email: &str) -> UserRecord {
        UserRecord {
            id: id.to_owned(),
            name: name.to_owned(),
            email: email.to_owned(),
            status: UserStatus::NotVerified,
            phone: String::new(),
            bio: String::new(),
        }
    }

    #[test]
    fn test_email_query_matches_single_record() {
        let records = vec![record("u1", "A", "a@x.com"), record("u2", "B", "b@x.com")];

        let filtered = filter_users(&records, "a@x");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "u1");
    }

    #[test]
    fn test_empty_query_matches_everything_in_order() {
        let records = vec![
            record("u3", "C", "c@x.com"),
            record("u1", "A", "a@x.com"),
            record("u2", "B", "b@x.com"),
        ];

        let filtered = filter_users(&records, "");
        let ids: Vec<&str> = filtered.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["u3", "u1", "u2"]);
    }

    #[test]
    fn test_match_is_case_insensitive_both_ways() {
        let records = vec![record("u1", "Janet", "Janet@Example.com")];

        assert_eq!(filter_users(&records, "janet@").len(), 1);
        assert_eq!(filter_users(&records, "JANET@").len(), 1);
        assert_eq!(filter_users(&records, "U1").len(), 1);
    }

    #[test]
    fn test_identifier_substring_matches() {
        let records = vec![record("u1234", "A", "a@x.com"), record("u2453", "B", "b@x.com")];

        let filtered = filter_users(&records, "245");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "u2453");
    }

    #[test]
    fn test_name_phone_and_bio_are_not_searched() {
        let mut sample = record("u1", "Findme", "a@x.com");
        sample.phone = "0700".to_owned();
        sample.bio = "loves rust".to_owned();
        let records = vec![sample];

        assert!(filter_users(&records, "findme").is_empty());
        assert!(filter_users(&records, "0700").is_empty());
        assert!(filter_users(&records, "rust").is_empty());
    }

    #[test]
    fn test_filter_preserves_relative_order() {
        let records = vec![
            record("u9", "A", "match@x.com"),
            record("u5", "B", "other@y.com"),
            record("u7", "C", "match@z.com"),
        ];

        let filtered = filter_users(&records, "match");
        let ids: Vec<&str> = filtered.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["u9", "u7"]);
    }

    #[test]
    fn test_no_match_returns_empty() {
        let records = vec![record("u1", "A", "a@x.com")];
        assert!(filter_users(&records, "zzz").is_empty());
    }

    #[test]
    fn test_filter_does_not_touch_the_input() {
        let records = vec![record("u1", "A", "a@x.com"), record("u2", "B", "b@x.com")];
        let before = records.clone();

        let _ = filter_users(&records, "a@x");
        assert_eq!(records, before);
    }
}
