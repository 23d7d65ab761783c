//! Distinct-value domains per field.
//!
//! Built once per dataset load in a single pass; the sets back filter choice
//! lists and autosuggestion, so they are deduplicated, exclude empty values,
//! and iterate in ascending lexicographic order.

use std::collections::{BTreeMap, BTreeSet};

use roll_model::{Field, VoterRecord};

/// Distinct non-empty values per indexable field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldIndex {
    values: BTreeMap<Field, BTreeSet<String>>,
}

impl FieldIndex {
    /// Index all of [`Field::INDEXABLE`] in one pass over the dataset.
    pub fn build(dataset: &[VoterRecord]) -> Self {
        let mut values: BTreeMap<Field, BTreeSet<String>> = Field::INDEXABLE
            .into_iter()
            .map(|field| (field, BTreeSet::new()))
            .collect();
        for record in dataset {
            for (field, set) in &mut values {
                if let Some(text) = record.text(*field) {
                    let trimmed = text.trim();
                    if !trimmed.is_empty() {
                        set.insert(trimmed.to_string());
                    }
                }
            }
        }
        Self { values }
    }

    /// Sorted distinct values for one field; empty for unindexed fields.
    pub fn values(&self, field: Field) -> impl Iterator<Item = &str> {
        self.values
            .get(&field)
            .into_iter()
            .flatten()
            .map(String::as_str)
    }

    /// Number of distinct values for one field.
    pub fn len(&self, field: Field) -> usize {
        self.values.get(&field).map_or(0, BTreeSet::len)
    }

    pub fn is_empty(&self, field: Field) -> bool {
        self.len(field) == 0
    }
}

/// Sorted distinct non-empty values of one field, computed directly.
///
/// Per-field equivalent of [`FieldIndex::build`] for callers that need a
/// single domain without indexing everything.
pub fn unique_values(dataset: &[VoterRecord], field: Field) -> BTreeSet<String> {
    let mut values = BTreeSet::new();
    for record in dataset {
        if let Some(text) = record.text(field) {
            let trimmed = text.trim();
            if !trimmed.is_empty() {
                values.insert(trimmed.to_string());
            }
        }
    }
    values
}
