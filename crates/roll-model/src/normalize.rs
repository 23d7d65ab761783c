//! Canonical forms for relation-type and gender values.
//!
//! Roll exports spell the same relation in short and long variants and mix
//! scripts for gender. Both normalizers are pure and total: malformed input
//! is mapped to a documented fallback, never rejected.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Short father variant as it appears in roll exports.
pub const RELATION_FATHER_SHORT: &str = "தந்தை";
/// Canonical long form for father's name.
pub const RELATION_FATHER: &str = "தந்தையின் பெயர்";
/// Short husband variant as it appears in roll exports.
pub const RELATION_HUSBAND_SHORT: &str = "கணவர்";
/// Canonical long form for husband's name.
pub const RELATION_HUSBAND: &str = "கணவரின் பெயர்";

/// Normalized gender of a roll record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Canonical roll token for this gender.
    pub fn as_str(self) -> &'static str {
        match self {
            Gender::Male => "ஆண்",
            Gender::Female => "பெண்",
        }
    }

    /// English label for reports.
    pub fn label(self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Map a raw relation-type value to its canonical form.
///
/// Trims whitespace; the short father and husband variants map to their long
/// canonical forms; any other non-empty value passes through trimmed; empty
/// input yields the empty string.
pub fn normalize_relation(raw: &str) -> String {
    let trimmed = raw.trim();
    match trimmed {
        RELATION_FATHER_SHORT | RELATION_FATHER => RELATION_FATHER.to_string(),
        RELATION_HUSBAND_SHORT | RELATION_HUSBAND => RELATION_HUSBAND.to_string(),
        other => other.to_string(),
    }
}

/// Map a raw gender value to a [`Gender`].
///
/// Case-insensitive heuristic: any value containing a female marker (the
/// Tamil female word, "female", "woman", the bare value "f", or the partial
/// prefix "பெ") is `Female`; everything else, including empty or absent
/// input, is `Male`. The empty-input default is preserved from the observed
/// roll behavior — missing gender is reported as male, not as unknown.
pub fn normalize_gender(raw: &str) -> Gender {
    let value = raw.trim().to_lowercase();
    if value.contains("பெண்")
        || value.contains("female")
        || value.contains("woman")
        || value == "f"
        || value.contains("பெ")
    {
        Gender::Female
    } else {
        Gender::Male
    }
}
