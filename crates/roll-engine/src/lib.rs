//! Filter-and-present engine for electoral-roll datasets.
//!
//! All operations are pure functions over an immutable dataset:
//!
//! - **index**: distinct-value domains per field for filter choice lists
//! - **filter**: the criteria set and the AND-combined match predicate
//! - **household**: same-address grouping ordered by running number
//! - **page**: pagination projection over a filtered sequence
//! - **session**: owned dataset plus memoized derived state
//! - **stats**: roll-wide summary counts
//!
//! The engine never fails on data quality; malformed values are absorbed by
//! coercion at the model layer and out-of-range page requests are clamped.

pub mod filter;
pub mod household;
pub mod index;
pub mod page;
pub mod session;
pub mod stats;

pub use filter::FilterState;
pub use household::household_members;
pub use index::{FieldIndex, unique_values};
pub use page::{DEFAULT_PAGE_SIZE, PAGE_SIZES, PageView, project};
pub use session::RollSession;
pub use stats::{AgeGroups, DatasetSummary};
