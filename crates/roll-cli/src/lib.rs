//! Shared pieces of the voterroll CLI: logging bootstrap and table
//! rendering. The binary's argument parsing and command dispatch live in
//! `main.rs`.

pub mod logging;
pub mod render;
