//! Dataset loaders for electoral-roll exports.
//!
//! The roll arrives either as the JSON array the viewer ships or as a CSV
//! with the same column headers. Loading happens once per session; the
//! resulting [`Dataset`] is owned by the caller and read-only thereafter.
//!
//! # Example
//!
//! ```ignore
//! use roll_ingest::load_dataset;
//!
//! let dataset = load_dataset(Path::new("data/roll.json"))?;
//! let session = roll_engine::RollSession::new(dataset);
//! ```

mod error;
mod loader;

pub use error::{IngestError, Result};
pub use loader::{load_csv, load_dataset, load_json};
