//! Typed data model for electoral-roll records.
//!
//! This crate defines the record shape shared by the engine, ingest, and CLI
//! crates:
//!
//! - **record**: the [`VoterRecord`] struct with explicit optional fields
//! - **field**: the [`Field`] enumeration of roll columns
//! - **normalize**: canonical forms for relation-type and gender values
//! - **coerce**: integer coercion for numeric-string fields

pub mod coerce;
pub mod field;
pub mod normalize;
pub mod record;

pub use coerce::parse_int;
pub use field::Field;
pub use normalize::{Gender, normalize_gender, normalize_relation};
pub use record::{Dataset, VoterRecord};
