//! A view session over one loaded dataset.
//!
//! The session owns the injected dataset, builds the field index once, and
//! memoizes the filtered sequence; there is no process-wide state. Every
//! filter mutation resets the page number to 1 unconditionally — even when
//! the new filtered count would still cover the old page — and so does a
//! page-size change.

use std::collections::BTreeSet;

use roll_model::{Dataset, Field, VoterRecord};

use crate::filter::FilterState;
use crate::household::household_members;
use crate::index::{FieldIndex, unique_values};
use crate::page::{DEFAULT_PAGE_SIZE, PAGE_SIZES, PageView, project};
use crate::stats::DatasetSummary;

pub struct RollSession {
    dataset: Dataset,
    index: FieldIndex,
    filters: FilterState,
    page_size: usize,
    page_number: usize,
    /// Dataset indices matching the current filters; None when stale.
    filtered: Option<Vec<usize>>,
}

impl RollSession {
    /// Take ownership of a loaded dataset and index it.
    pub fn new(dataset: Dataset) -> Self {
        let index = FieldIndex::build(&dataset);
        Self {
            dataset,
            index,
            filters: FilterState::default(),
            page_size: DEFAULT_PAGE_SIZE,
            page_number: 1,
            filtered: None,
        }
    }

    pub fn dataset(&self) -> &[VoterRecord] {
        &self.dataset
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// The requested page number; the projection clamps it to range.
    pub fn page_number(&self) -> usize {
        self.page_number
    }

    /// Replace the whole filter state. Resets to page 1.
    pub fn set_filters(&mut self, filters: FilterState) {
        self.filters = filters;
        self.touch_filters();
    }

    /// Mutate the filter state in place. Resets to page 1 even when the
    /// edit leaves the state unchanged.
    pub fn edit_filters(&mut self, edit: impl FnOnce(&mut FilterState)) {
        edit(&mut self.filters);
        self.touch_filters();
    }

    /// Clear every criterion. Resets to page 1.
    pub fn clear_filters(&mut self) {
        self.filters = FilterState::default();
        self.touch_filters();
    }

    /// Select one of [`PAGE_SIZES`]; other values are ignored. A selected
    /// size resets to page 1.
    pub fn set_page_size(&mut self, size: usize) -> bool {
        if !PAGE_SIZES.contains(&size) {
            return false;
        }
        self.page_size = size;
        self.page_number = 1;
        true
    }

    /// Request a page; out-of-range numbers are clamped at projection.
    pub fn go_to_page(&mut self, number: usize) {
        self.page_number = number.max(1);
    }

    /// Number of records matching the current filters.
    pub fn filtered_count(&mut self) -> usize {
        self.ensure_filtered();
        self.filtered.as_deref().map_or(0, <[usize]>::len)
    }

    /// Project the current page of the filtered sequence.
    pub fn page(&mut self) -> PageView<'_> {
        self.ensure_filtered();
        let indices = self.filtered.as_deref().unwrap_or(&[]);
        let rows: Vec<&VoterRecord> = indices
            .iter()
            .map(|&position| &self.dataset[position])
            .collect();
        project(&rows, self.page_size, self.page_number)
    }

    /// Distinct non-empty values of one field.
    ///
    /// Indexable fields come from the build-once index; anything else is
    /// computed directly from the dataset, so every field yields its full
    /// domain.
    pub fn unique_values(&self, field: Field) -> BTreeSet<String> {
        if Field::INDEXABLE.contains(&field) {
            self.index.values(field).map(str::to_string).collect()
        } else {
            unique_values(&self.dataset, field)
        }
    }

    /// Household lookup against the full dataset, not the filtered view.
    pub fn household(&self, household_id: &str) -> Vec<&VoterRecord> {
        household_members(&self.dataset, household_id)
    }

    pub fn summary(&self) -> DatasetSummary {
        DatasetSummary::compute(&self.dataset)
    }

    fn touch_filters(&mut self) {
        self.page_number = 1;
        self.filtered = None;
    }

    fn ensure_filtered(&mut self) {
        if self.filtered.is_none() {
            self.filtered = Some(self.filters.filter_indices(&self.dataset));
        }
    }
}
