//! Excel input module
//!
//! Reads one worksheet of an .xlsx workbook into a [`crate::types::SheetTable`],
//! dropping placeholder columns and trimming headers on the way in.

mod reader;

pub use reader::SheetReader;
