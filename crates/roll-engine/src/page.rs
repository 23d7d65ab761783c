//! Pagination projection over a filtered sequence.

use serde::Serialize;

use roll_model::VoterRecord;

/// Page sizes a session may select.
pub const PAGE_SIZES: [usize; 4] = [10, 25, 50, 100];

/// Session default page size.
pub const DEFAULT_PAGE_SIZE: usize = 25;

/// The visible slice of a filtered sequence plus paging metadata.
///
/// Derived and non-owned: recomputed from its inputs, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageView<'a> {
    pub visible: Vec<&'a VoterRecord>,
    pub total_count: usize,
    pub page_count: usize,
    /// The page actually shown, after clamping the request to
    /// `1..=page_count`.
    pub page_number: usize,
    pub page_size: usize,
}

/// Slice one page out of a filtered sequence.
///
/// `page_count` is `max(1, ceil(total / size))`; even an empty sequence has
/// one (empty) page. Out-of-range page requests are clamped, never an
/// error. The projector accepts any size and treats zero as one; the fixed
/// [`PAGE_SIZES`] set is enforced at the session layer.
pub fn project<'a>(rows: &[&'a VoterRecord], page_size: usize, page_number: usize) -> PageView<'a> {
    let page_size = page_size.max(1);
    let total_count = rows.len();
    let page_count = total_count.div_ceil(page_size).max(1);
    let page_number = page_number.clamp(1, page_count);
    let start = (page_number - 1) * page_size;
    let end = (start + page_size).min(total_count);
    let visible = if start < total_count {
        rows[start..end].to_vec()
    } else {
        Vec::new()
    };
    PageView {
        visible,
        total_count,
        page_count,
        page_number,
        page_size,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(count: usize) -> Vec<VoterRecord> {
        (0..count)
            .map(|position| VoterRecord {
                serial_number: Some(position.to_string()),
                ..VoterRecord::default()
            })
            .collect()
    }

    fn serials<'a>(view: &PageView<'a>) -> Vec<&'a str> {
        view.visible
            .iter()
            .filter_map(|record| record.serial_number.as_deref())
            .collect()
    }

    #[test]
    fn five_rows_at_size_two() {
        let owned = rows(5);
        let refs: Vec<&VoterRecord> = owned.iter().collect();
        let first = project(&refs, 2, 1);
        assert_eq!(first.page_count, 3);
        assert_eq!(first.total_count, 5);
        assert_eq!(serials(&first), vec!["0", "1"]);
        let last = project(&refs, 2, 3);
        assert_eq!(serials(&last), vec!["4"]);
    }

    #[test]
    fn empty_sequence_has_one_empty_page() {
        let view = project(&[], 100, 1);
        assert_eq!(view.page_count, 1);
        assert_eq!(view.total_count, 0);
        assert!(view.visible.is_empty());
    }

    #[test]
    fn out_of_range_requests_are_clamped() {
        let owned = rows(5);
        let refs: Vec<&VoterRecord> = owned.iter().collect();
        let high = project(&refs, 2, 99);
        assert_eq!(high.page_number, 3);
        assert_eq!(serials(&high), vec!["4"]);
        let low = project(&refs, 2, 0);
        assert_eq!(low.page_number, 1);
        assert_eq!(serials(&low), vec!["0", "1"]);
    }

    #[test]
    fn pages_cover_the_sequence_exactly_once() {
        let owned = rows(23);
        let refs: Vec<&VoterRecord> = owned.iter().collect();
        let mut seen = Vec::new();
        let page_count = project(&refs, 10, 1).page_count;
        for number in 1..=page_count {
            seen.extend(serials(&project(&refs, 10, number)));
        }
        let expected: Vec<String> = (0..23).map(|position| position.to_string()).collect();
        assert_eq!(seen, expected.iter().map(String::as_str).collect::<Vec<_>>());
    }

    #[test]
    fn zero_size_is_treated_as_one() {
        let owned = rows(3);
        let refs: Vec<&VoterRecord> = owned.iter().collect();
        let view = project(&refs, 0, 2);
        assert_eq!(view.page_count, 3);
        assert_eq!(serials(&view), vec!["1"]);
    }
}
