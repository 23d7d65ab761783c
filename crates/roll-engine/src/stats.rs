//! Roll-wide summary statistics.
//!
//! Reproduces the dashboard counts: totals, distinct location counts, a
//! gender tally by exact canonical token, and fixed age buckets. Records
//! whose gender matches neither canonical token land in `other`; records
//! under 18 or without a parseable age fall outside every bucket.

use std::collections::BTreeSet;

use serde::Serialize;

use roll_model::{Gender, VoterRecord};

/// Voter counts per age bracket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AgeGroups {
    pub from_18_to_20: usize,
    pub from_21_to_25: usize,
    pub from_26_to_40: usize,
    pub from_41_to_50: usize,
    pub from_51_up: usize,
}

/// One-pass summary of a dataset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DatasetSummary {
    pub total: usize,
    pub constituencies: usize,
    pub wards: usize,
    pub booths: usize,
    pub streets: usize,
    pub villages: usize,
    pub male: usize,
    pub female: usize,
    pub other: usize,
    pub age_groups: AgeGroups,
}

impl DatasetSummary {
    pub fn compute(dataset: &[VoterRecord]) -> Self {
        let mut constituencies = BTreeSet::new();
        let mut wards = BTreeSet::new();
        let mut booths = BTreeSet::new();
        let mut streets = BTreeSet::new();
        let mut villages = BTreeSet::new();
        let mut summary = DatasetSummary {
            total: dataset.len(),
            ..DatasetSummary::default()
        };
        for record in dataset {
            if let Some(value) = record.constituency.as_deref() {
                constituencies.insert(value);
            }
            if let Some(value) = record.ward.as_deref() {
                wards.insert(value);
            }
            if let Some(value) = record.booth.as_deref() {
                booths.insert(value);
            }
            if let Some(value) = record.street.as_deref() {
                streets.insert(value);
            }
            if let Some(value) = record.village.as_deref() {
                villages.insert(value);
            }
            match record.gender.as_deref() {
                Some(value) if value == Gender::Male.as_str() => summary.male += 1,
                Some(value) if value == Gender::Female.as_str() => summary.female += 1,
                _ => summary.other += 1,
            }
            match record.age {
                Some(18..=20) => summary.age_groups.from_18_to_20 += 1,
                Some(21..=25) => summary.age_groups.from_21_to_25 += 1,
                Some(26..=40) => summary.age_groups.from_26_to_40 += 1,
                Some(41..=50) => summary.age_groups.from_41_to_50 += 1,
                Some(age) if age >= 51 => summary.age_groups.from_51_up += 1,
                _ => {}
            }
        }
        summary.constituencies = constituencies.len();
        summary.wards = wards.len();
        summary.booths = booths.len();
        summary.streets = streets.len();
        summary.villages = villages.len();
        summary
    }
}
