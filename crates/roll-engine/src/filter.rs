//! Filter criteria and the record match predicate.
//!
//! Criteria combine with logical AND; an unset criterion (None or empty set)
//! never excludes a record. Match kinds are intentionally heterogeneous and
//! follow the roll viewer's behavior per criterion:
//!
//! | Criterion | Kind |
//! |---|---|
//! | constituency | exact |
//! | village / street / booth / ward | multi-select membership |
//! | voter id | case-insensitive substring, trimmed |
//! | house number | case-insensitive exact |
//! | serial number | exact after integer coercion |
//! | name / relative name | case-insensitive substring |
//! | relation type | equality after relation normalization |
//! | age from / to | inclusive range, independently optional |
//! | gender | equality after gender normalization |
//! | page number | case-insensitive exact |
//! | household id / sequence | exact string equality |
//!
//! A record missing a field fails any set exact or range criterion on that
//! field.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use roll_model::{VoterRecord, normalize_gender, normalize_relation, parse_int};

/// The fixed set of filter criteria.
///
/// Scalar criteria use `None` for "unset"; multi-select criteria use the
/// empty set. Setters built from raw UI text should route through
/// [`FilterState::text_criterion`] so blank input stays unset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterState {
    pub constituency: Option<String>,
    pub villages: BTreeSet<String>,
    pub streets: BTreeSet<String>,
    pub booths: BTreeSet<String>,
    pub wards: BTreeSet<String>,
    pub voter_id: Option<String>,
    pub house_number: Option<String>,
    pub serial_number: Option<String>,
    pub name: Option<String>,
    pub relation_type: Option<String>,
    pub relative_name: Option<String>,
    pub age_from: Option<u32>,
    pub age_to: Option<u32>,
    pub gender: Option<String>,
    pub page_number: Option<String>,
    pub household_id: Option<String>,
    pub household_seq: Option<String>,
}

impl FilterState {
    /// Interpret raw text as a scalar criterion value: blank means unset.
    pub fn text_criterion(raw: &str) -> Option<String> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }

    /// True when no criterion is set.
    pub fn is_empty(&self) -> bool {
        *self == FilterState::default()
    }

    /// Evaluate all active criteria against one record.
    ///
    /// Pure; short-circuits on the first failing criterion.
    pub fn matches(&self, record: &VoterRecord) -> bool {
        exact(record.constituency.as_deref(), self.constituency.as_deref())
            && member(&self.villages, record.village.as_deref())
            && member(&self.streets, record.street.as_deref())
            && member(&self.booths, record.booth.as_deref())
            && member(&self.wards, record.ward.as_deref())
            && substring_ci_trimmed(record.id_code.as_deref(), self.voter_id.as_deref())
            && exact_ci(record.house_number.as_deref(), self.house_number.as_deref())
            && serial_eq(record.serial_number.as_deref(), self.serial_number.as_deref())
            && substring_ci(record.name.as_deref(), self.name.as_deref())
            && relation_eq(record.relation_type.as_deref(), self.relation_type.as_deref())
            && substring_ci(record.relative_name.as_deref(), self.relative_name.as_deref())
            && age_in_range(record.age, self.age_from, self.age_to)
            && gender_eq(record.gender.as_deref(), self.gender.as_deref())
            && exact_ci(record.page_number.as_deref(), self.page_number.as_deref())
            && exact(record.household_id.as_deref(), self.household_id.as_deref())
            && exact(record.household_seq.as_deref(), self.household_seq.as_deref())
    }

    /// Filter a dataset to the indices of matching records, in dataset order.
    pub fn filter_indices(&self, dataset: &[VoterRecord]) -> Vec<usize> {
        dataset
            .iter()
            .enumerate()
            .filter(|(_, record)| self.matches(record))
            .map(|(position, _)| position)
            .collect()
    }
}

fn exact(value: Option<&str>, wanted: Option<&str>) -> bool {
    match wanted {
        None => true,
        Some(wanted) => value == Some(wanted),
    }
}

fn exact_ci(value: Option<&str>, wanted: Option<&str>) -> bool {
    match wanted {
        None => true,
        Some(wanted) => value.is_some_and(|value| value.eq_ignore_ascii_case(wanted)),
    }
}

fn substring_ci(value: Option<&str>, wanted: Option<&str>) -> bool {
    match wanted {
        None => true,
        Some(wanted) => {
            let needle = wanted.to_lowercase();
            value.is_some_and(|value| value.to_lowercase().contains(&needle))
        }
    }
}

/// Voter ids trim both sides before the substring check; the other
/// substring criteria compare untrimmed.
fn substring_ci_trimmed(value: Option<&str>, wanted: Option<&str>) -> bool {
    substring_ci(value.map(str::trim), wanted.map(str::trim))
}

fn member(set: &BTreeSet<String>, value: Option<&str>) -> bool {
    if set.is_empty() {
        return true;
    }
    value.is_some_and(|value| set.contains(value))
}

/// Serial numbers compare as integers when both sides parse, so "007"
/// matches "7"; alphanumeric serials fall back to trimmed string equality.
fn serial_eq(value: Option<&str>, wanted: Option<&str>) -> bool {
    match wanted {
        None => true,
        Some(wanted) => value.is_some_and(|value| match (parse_int(value), parse_int(wanted)) {
            (Some(left), Some(right)) => left == right,
            _ => value.trim() == wanted.trim(),
        }),
    }
}

fn relation_eq(value: Option<&str>, wanted: Option<&str>) -> bool {
    match wanted {
        None => true,
        Some(wanted) => {
            value.is_some_and(|value| normalize_relation(value) == normalize_relation(wanted))
        }
    }
}

/// Gender compares after normalization on both sides. A record with no
/// gender value normalizes to male, so a male criterion matches it; this
/// mirrors the roll viewer's default-to-male behavior.
fn gender_eq(value: Option<&str>, wanted: Option<&str>) -> bool {
    match wanted {
        None => true,
        Some(wanted) => normalize_gender(value.unwrap_or("")) == normalize_gender(wanted),
    }
}

fn age_in_range(age: Option<u32>, from: Option<u32>, to: Option<u32>) -> bool {
    if from.is_none() && to.is_none() {
        return true;
    }
    let Some(age) = age else {
        return false;
    };
    from.is_none_or(|from| age >= from) && to.is_none_or(|to| age <= to)
}
