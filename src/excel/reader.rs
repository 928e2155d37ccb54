//! Excel reader implementation - one worksheet → SheetTable

use crate::error::{FlowError, FlowResult};
use crate::types::{CellValue, SheetTable};
use calamine::{open_workbook, Data, Range, Reader, Xlsx};
use regex::Regex;
use std::collections::HashSet;
use std::path::Path;

/// Excel reader for pulling a single named worksheet into tabular form
pub struct SheetReader {
    path: std::path::PathBuf,
}

impl SheetReader {
    /// Create a new sheet reader
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Read the named worksheet into a `SheetTable`.
    ///
    /// Opening the workbook or resolving the sheet name is fatal; an empty
    /// sheet is not and yields an empty table.
    pub fn read_sheet(&self, sheet: &str) -> FlowResult<SheetTable> {
        let mut workbook: Xlsx<_> = open_workbook(&self.path)
            .map_err(|e| FlowError::Excel(format!("Failed to open Excel file: {}", e)))?;

        let range = workbook
            .worksheet_range(sheet)
            .map_err(|e| FlowError::Excel(format!("Failed to read sheet '{}': {}", sheet, e)))?;

        Ok(Self::table_from_range(&range))
    }

    fn table_from_range(range: &Range<Data>) -> SheetTable {
        let (height, width) = range.get_size();
        if height == 0 || width == 0 {
            return SheetTable::default();
        }

        // Header row: stringify whatever is there, blank for missing cells.
        // Spreadsheet tooling labels headerless columns "Unnamed: <n>";
        // those columns are dropped wholesale.
        let placeholder = Regex::new(r"^Unnamed: \d+$").expect("valid header pattern");
        let mut headers: Vec<String> = Vec::new();
        let mut keep: Vec<usize> = Vec::new();
        for col in 0..width {
            let raw = match range.get((0, col)) {
                Some(Data::String(s)) => s.clone(),
                Some(Data::Int(i)) => i.to_string(),
                Some(Data::Float(f)) => f.to_string(),
                Some(Data::Empty) | None => String::new(),
                Some(other) => other.to_string(),
            };
            if placeholder.is_match(raw.trim()) {
                continue;
            }
            headers.push(raw.trim().to_string());
            keep.push(col);
        }
        let headers = mangle_duplicate_headers(headers);

        let mut rows: Vec<Vec<CellValue>> = Vec::with_capacity(height.saturating_sub(1));
        for row in 1..height {
            let cells = keep
                .iter()
                .map(|&col| match range.get((row, col)) {
                    Some(cell) => CellValue::from(cell),
                    None => CellValue::Null,
                })
                .collect();
            rows.push(cells);
        }

        SheetTable { headers, rows }
    }
}

/// Suffix repeated header names the way spreadsheet readers do:
/// `Description`, `Description.1`, `Description.2`, ...
///
/// The output allow-list carries `Description.1`, so the second copy of a
/// duplicated column must keep its data under the suffixed name.
fn mangle_duplicate_headers(headers: Vec<String>) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut unique: Vec<String> = Vec::with_capacity(headers.len());
    for name in headers {
        let mangled = if seen.contains(&name) {
            let mut k = 1;
            let mut candidate = format!("{}.{}", name, k);
            while seen.contains(&candidate) {
                k += 1;
                candidate = format!("{}.{}", name, k);
            }
            candidate
        } else {
            name
        };
        seen.insert(mangled.clone());
        unique.push(mangled);
    }
    unique
}
