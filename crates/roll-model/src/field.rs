//! Compile-time enumeration of roll columns.
//!
//! The filter criteria and indexable value domains are all keyed by this
//! enum, so an unknown field name cannot reach the engine.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A column of the electoral roll.
///
/// `Street` and `Booth` are the domain names for the export columns
/// "Division" and "Part".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Field {
    SerialNumber,
    Position,
    Name,
    HouseholdId,
    HouseholdSeq,
    RelationType,
    RelativeName,
    HouseNumber,
    Age,
    Gender,
    IdCode,
    PageNumber,
    Constituency,
    Street,
    Village,
    Ward,
    Booth,
}

impl Field {
    /// All fields in roll column order.
    pub const ALL: [Field; 17] = [
        Field::SerialNumber,
        Field::Position,
        Field::Name,
        Field::HouseholdId,
        Field::HouseholdSeq,
        Field::RelationType,
        Field::RelativeName,
        Field::HouseNumber,
        Field::Age,
        Field::Gender,
        Field::IdCode,
        Field::PageNumber,
        Field::Constituency,
        Field::Street,
        Field::Village,
        Field::Ward,
        Field::Booth,
    ];

    /// Fields whose distinct values populate filter choice lists.
    pub const INDEXABLE: [Field; 9] = [
        Field::Constituency,
        Field::Village,
        Field::Street,
        Field::Ward,
        Field::Booth,
        Field::RelationType,
        Field::Gender,
        Field::HouseholdId,
        Field::HouseholdSeq,
    ];

    /// Column header as it appears in roll exports.
    pub fn column(self) -> &'static str {
        match self {
            Field::SerialNumber => "Serial Number",
            Field::Position => "Position",
            Field::Name => "Name",
            Field::HouseholdId => "One Roof",
            Field::HouseholdSeq => "One Roof Running Number",
            Field::RelationType => "Relation Type",
            Field::RelativeName => "Relative Name",
            Field::HouseNumber => "House Number",
            Field::Age => "Age",
            Field::Gender => "Gender",
            Field::IdCode => "Id Code",
            Field::PageNumber => "Page",
            Field::Constituency => "Constituency",
            Field::Street => "Division",
            Field::Village => "Village",
            Field::Ward => "Ward",
            Field::Booth => "Part",
        }
    }

    /// Stable lowercase key for CLI arguments and config.
    pub fn key(self) -> &'static str {
        match self {
            Field::SerialNumber => "serial",
            Field::Position => "position",
            Field::Name => "name",
            Field::HouseholdId => "household",
            Field::HouseholdSeq => "household-seq",
            Field::RelationType => "relation",
            Field::RelativeName => "relative",
            Field::HouseNumber => "house",
            Field::Age => "age",
            Field::Gender => "gender",
            Field::IdCode => "id-code",
            Field::PageNumber => "page",
            Field::Constituency => "constituency",
            Field::Street => "street",
            Field::Village => "village",
            Field::Ward => "ward",
            Field::Booth => "booth",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Field {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        Field::ALL
            .into_iter()
            .find(|field| field.key() == key)
            .ok_or_else(|| format!("unknown field: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_round_trips() {
        for field in Field::ALL {
            assert_eq!(field.key().parse::<Field>(), Ok(field));
        }
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("Gender".parse::<Field>(), Ok(Field::Gender));
        assert_eq!(" BOOTH ".parse::<Field>(), Ok(Field::Booth));
    }

    #[test]
    fn parse_rejects_unknown() {
        assert!("taluk".parse::<Field>().is_err());
    }
}
