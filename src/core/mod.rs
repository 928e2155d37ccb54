//! Core normalization logic
//!
//! Turns a cleaned [`crate::types::SheetTable`] into dashboard-shaped rows
//! plus dataset metadata.

mod normalizer;

pub use normalizer::{build_meta, normalize_table, to_num, NormalizedTable};
