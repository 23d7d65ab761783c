//! The roll record and dataset types.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::field::Field;

/// An ordered roll, loaded once per session and never mutated in place.
///
/// Insertion order is the display and pagination order.
pub type Dataset = Vec<VoterRecord>;

/// One electoral-roll entry.
///
/// No field is guaranteed present. Identifier-like columns (serial number,
/// household id, household sequence, ward) arrive as numbers in some exports
/// and strings in others; they deserialize through a flexible reader and are
/// stored stringified. Age is coerced to an integer; unparseable ages become
/// absent rather than failing the load.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VoterRecord {
    #[serde(
        rename = "Serial Number",
        default,
        deserialize_with = "flex::opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub serial_number: Option<String>,

    #[serde(
        rename = "Position",
        default,
        deserialize_with = "flex::opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub position: Option<String>,

    #[serde(
        rename = "Name",
        default,
        deserialize_with = "flex::opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub name: Option<String>,

    #[serde(
        rename = "One Roof",
        default,
        deserialize_with = "flex::opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub household_id: Option<String>,

    #[serde(
        rename = "One Roof Running Number",
        default,
        deserialize_with = "flex::opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub household_seq: Option<String>,

    #[serde(
        rename = "Relation Type",
        default,
        deserialize_with = "flex::opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub relation_type: Option<String>,

    #[serde(
        rename = "Relative Name",
        default,
        deserialize_with = "flex::opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub relative_name: Option<String>,

    #[serde(
        rename = "House Number",
        default,
        deserialize_with = "flex::opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub house_number: Option<String>,

    #[serde(
        rename = "Age",
        default,
        deserialize_with = "flex::opt_age",
        skip_serializing_if = "Option::is_none"
    )]
    pub age: Option<u32>,

    #[serde(
        rename = "Gender",
        default,
        deserialize_with = "flex::opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub gender: Option<String>,

    #[serde(
        rename = "Id Code",
        default,
        deserialize_with = "flex::opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub id_code: Option<String>,

    #[serde(
        rename = "Page",
        default,
        deserialize_with = "flex::opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub page_number: Option<String>,

    #[serde(
        rename = "Constituency",
        default,
        deserialize_with = "flex::opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub constituency: Option<String>,

    #[serde(
        rename = "Division",
        default,
        deserialize_with = "flex::opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub street: Option<String>,

    #[serde(
        rename = "Village",
        default,
        deserialize_with = "flex::opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub village: Option<String>,

    #[serde(
        rename = "Ward",
        default,
        deserialize_with = "flex::opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub ward: Option<String>,

    #[serde(
        rename = "Part",
        default,
        deserialize_with = "flex::opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub booth: Option<String>,
}

impl VoterRecord {
    /// Text value of a column, if present.
    ///
    /// Age is rendered through its integer form, so `text(Field::Age)` and
    /// `age` never disagree.
    pub fn text(&self, field: Field) -> Option<Cow<'_, str>> {
        let borrowed = match field {
            Field::Age => return self.age.map(|age| Cow::Owned(age.to_string())),
            Field::SerialNumber => &self.serial_number,
            Field::Position => &self.position,
            Field::Name => &self.name,
            Field::HouseholdId => &self.household_id,
            Field::HouseholdSeq => &self.household_seq,
            Field::RelationType => &self.relation_type,
            Field::RelativeName => &self.relative_name,
            Field::HouseNumber => &self.house_number,
            Field::Gender => &self.gender,
            Field::IdCode => &self.id_code,
            Field::PageNumber => &self.page_number,
            Field::Constituency => &self.constituency,
            Field::Street => &self.street,
            Field::Village => &self.village,
            Field::Ward => &self.ward,
            Field::Booth => &self.booth,
        };
        borrowed.as_deref().map(Cow::Borrowed)
    }
}

mod flex {
    //! String-or-number deserialization for inconsistently typed exports.

    use serde::{Deserialize, Deserializer};

    use crate::coerce::parse_int;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Str(String),
        Int(i64),
        Float(f64),
    }

    pub fn opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<Raw>::deserialize(deserializer)?;
        Ok(raw.and_then(|value| {
            let text = match value {
                Raw::Str(text) => text,
                Raw::Int(number) => number.to_string(),
                Raw::Float(number) if number.fract() == 0.0 => (number as i64).to_string(),
                Raw::Float(number) => number.to_string(),
            };
            let trimmed = text.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        }))
    }

    pub fn opt_age<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<Raw>::deserialize(deserializer)?;
        Ok(raw.and_then(|value| match value {
            Raw::Int(number) => u32::try_from(number).ok(),
            Raw::Float(number) if number.fract() == 0.0 && number >= 0.0 => Some(number as u32),
            Raw::Float(_) => None,
            Raw::Str(text) => parse_int(&text).and_then(|number| u32::try_from(number).ok()),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_mixed_number_and_string_fields() {
        let raw = r#"{
            "Serial Number": 12,
            "Name": "Kumar",
            "One Roof": "45",
            "One Roof Running Number": 3,
            "Age": "34",
            "Ward": 7.0
        }"#;
        let record: VoterRecord = serde_json::from_str(raw).expect("parse record");
        assert_eq!(record.serial_number.as_deref(), Some("12"));
        assert_eq!(record.household_id.as_deref(), Some("45"));
        assert_eq!(record.household_seq.as_deref(), Some("3"));
        assert_eq!(record.age, Some(34));
        assert_eq!(record.ward.as_deref(), Some("7"));
        assert_eq!(record.gender, None);
    }

    #[test]
    fn malformed_age_is_absent() {
        let record: VoterRecord = serde_json::from_str(r#"{"Age": "unknown"}"#).expect("parse");
        assert_eq!(record.age, None);
    }

    #[test]
    fn empty_strings_are_absent() {
        let record: VoterRecord =
            serde_json::from_str(r#"{"Name": "  ", "Village": ""}"#).expect("parse");
        assert_eq!(record.name, None);
        assert_eq!(record.village, None);
    }

    #[test]
    fn text_covers_every_field() {
        let record = VoterRecord {
            age: Some(40),
            name: Some("Lakshmi".to_string()),
            ..VoterRecord::default()
        };
        assert_eq!(record.text(Field::Age).as_deref(), Some("40"));
        assert_eq!(record.text(Field::Name).as_deref(), Some("Lakshmi"));
        assert_eq!(record.text(Field::Booth), None);
    }
}
