//! Same-address ("One Roof") grouping.

use roll_model::{VoterRecord, parse_int};

/// All records sharing a household id, ordered by running number.
///
/// Operates on the full dataset, not the filtered view. The sort key is the
/// household sequence coerced to an integer; missing or unparseable
/// sequences sort last, and ties keep dataset order (stable sort). An empty
/// result is valid.
pub fn household_members<'a>(
    dataset: &'a [VoterRecord],
    household_id: &str,
) -> Vec<&'a VoterRecord> {
    let mut members: Vec<&VoterRecord> = dataset
        .iter()
        .filter(|record| record.household_id.as_deref() == Some(household_id))
        .collect();
    members.sort_by_key(|record| sequence_key(record));
    members
}

fn sequence_key(record: &VoterRecord) -> i64 {
    record
        .household_seq
        .as_deref()
        .and_then(parse_int)
        .unwrap_or(i64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member(household_id: &str, seq: Option<&str>, name: &str) -> VoterRecord {
        VoterRecord {
            household_id: Some(household_id.to_string()),
            household_seq: seq.map(str::to_string),
            name: Some(name.to_string()),
            ..VoterRecord::default()
        }
    }

    #[test]
    fn sorts_by_coerced_sequence_with_non_numeric_last() {
        let dataset = vec![
            member("12", Some("3"), "c"),
            member("12", Some("1"), "a"),
            member("12", Some("x"), "z"),
            member("12", Some("2"), "b"),
            member("13", Some("1"), "other house"),
        ];
        let members = household_members(&dataset, "12");
        let names: Vec<&str> = members
            .iter()
            .filter_map(|record| record.name.as_deref())
            .collect();
        assert_eq!(names, vec!["a", "b", "c", "z"]);
    }

    #[test]
    fn ties_and_missing_sequences_keep_dataset_order() {
        let dataset = vec![
            member("5", None, "first"),
            member("5", Some("junk"), "second"),
            member("5", None, "third"),
        ];
        let members = household_members(&dataset, "5");
        let names: Vec<&str> = members
            .iter()
            .filter_map(|record| record.name.as_deref())
            .collect();
        assert_eq!(names, vec!["first", "second", "third"]);
    }

    #[test]
    fn unknown_household_is_empty() {
        let dataset = vec![member("12", Some("1"), "a")];
        assert!(household_members(&dataset, "99").is_empty());
        assert!(household_members(&[], "12").is_empty());
    }

    #[test]
    fn id_match_is_exact_string_equality() {
        let dataset = vec![member("12", Some("1"), "a")];
        assert!(household_members(&dataset, "012").is_empty());
    }
}
