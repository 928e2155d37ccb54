//! fundflow - accounts-flow Excel → dashboard JSON converter
//!
//! This library reads a named worksheet from an .xlsx workbook, cleans its
//! columns, derives the signed flow amount and direction, and serializes the
//! rows plus summary metadata for a static web dashboard.
//!
//! # Example
//!
//! ```no_run
//! use fundflow::core::normalize_table;
//! use fundflow::excel::SheetReader;
//! use std::path::Path;
//!
//! let path = Path::new("accounts.xlsx");
//! let table = SheetReader::new(path).read_sheet("account flow")?;
//! let dataset = normalize_table(table);
//!
//! println!("Rows: {}", dataset.rows.len());
//! println!("Columns: {:?}", dataset.cols_present);
//! # Ok::<(), fundflow::error::FlowError>(())
//! ```

pub mod cli;
pub mod core;
pub mod error;
pub mod excel;
pub mod types;
pub mod writer;

// Re-export commonly used types
pub use error::{FlowError, FlowResult};
pub use types::{CellValue, DatasetMeta, SheetTable, OUTPUT_COLUMNS};
