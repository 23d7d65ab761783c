//! Property tests for the filter predicate and the pagination projector.

use proptest::collection::vec;
use proptest::option;
use proptest::prelude::*;

use roll_engine::{FilterState, project};
use roll_model::VoterRecord;

fn arb_record() -> impl Strategy<Value = VoterRecord> {
    (
        option::of(18u32..100),
        option::of(prop::sample::select(vec!["Melur", "Usilampatti", "Vadipatti"])),
        option::of(prop::sample::select(vec!["ஆண்", "பெண்", ""])),
        option::of("[a-z]{1,8}"),
        option::of(1u32..40),
    )
        .prop_map(|(age, village, gender, name, household)| VoterRecord {
            age,
            village: village.map(str::to_string),
            gender: gender.map(str::to_string),
            name,
            household_id: household.map(|id| id.to_string()),
            ..VoterRecord::default()
        })
}

proptest! {
    /// Adding a constraint can only shrink or preserve the result set.
    #[test]
    fn and_composition_is_monotonic(
        dataset in vec(arb_record(), 0..60),
        age_from in option::of(18u32..100),
        village in option::of(prop::sample::select(vec!["Melur", "Usilampatti"])),
    ) {
        let mut base = FilterState::default();
        base.age_from = age_from;
        let base_matches = base.filter_indices(&dataset);

        let mut narrowed = base.clone();
        if let Some(village) = village {
            narrowed.villages.insert(village.to_string());
        }
        let narrowed_matches = narrowed.filter_indices(&dataset);

        prop_assert!(narrowed_matches.len() <= base_matches.len());
        prop_assert!(narrowed_matches.iter().all(|index| base_matches.contains(index)));
    }

    /// The predicate is a pure function of (dataset, filters).
    #[test]
    fn filtering_is_idempotent(
        dataset in vec(arb_record(), 0..60),
        age_from in option::of(18u32..100),
        name in option::of("[a-z]{1,4}"),
    ) {
        let mut filters = FilterState::default();
        filters.age_from = age_from;
        filters.name = name;
        prop_assert_eq!(filters.filter_indices(&dataset), filters.filter_indices(&dataset));
    }

    /// Concatenating pages 1..=page_count reproduces the filtered sequence
    /// exactly, with no duplicates or gaps.
    #[test]
    fn pagination_covers_exactly_once(
        dataset in vec(arb_record(), 0..120),
        page_size in 1usize..110,
    ) {
        let rows: Vec<&VoterRecord> = dataset.iter().collect();
        let page_count = project(&rows, page_size, 1).page_count;
        let mut concatenated: Vec<&VoterRecord> = Vec::new();
        for number in 1..=page_count {
            let view = project(&rows, page_size, number);
            prop_assert_eq!(view.page_number, number);
            concatenated.extend(view.visible);
        }
        prop_assert_eq!(concatenated, rows);
    }

    /// Page count is always at least one and consistent with the total.
    #[test]
    fn page_count_bounds(dataset in vec(arb_record(), 0..120), page_size in 1usize..110) {
        let rows: Vec<&VoterRecord> = dataset.iter().collect();
        let view = project(&rows, page_size, 1);
        prop_assert!(view.page_count >= 1);
        prop_assert!((view.page_count - 1) * page_size <= view.total_count);
        prop_assert!(view.page_count * page_size >= view.total_count);
    }
}
