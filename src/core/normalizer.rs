//! Tabular record normalizer - cleaned sheet → dashboard rows + metadata

use crate::types::{CellValue, DatasetMeta, SheetTable, OUTPUT_COLUMNS};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde_json::{Map, Value};
use std::path::Path;

/// Text date formats accepted for the `Date` column, month-first preferred
/// (mirrors the source spreadsheet conventions).
const DATE_FORMATS: [&str; 4] = ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%d/%m/%Y"];

/// Normalized dataset, ready for serialization.
///
/// Rows are already JSON objects keyed exactly by `cols_present`, in
/// allow-list order.
#[derive(Debug)]
pub struct NormalizedTable {
    pub cols_present: Vec<String>,
    pub rows: Vec<Map<String, Value>>,
    pub date_min: Option<NaiveDate>,
    pub date_max: Option<NaiveDate>,
}

/// Coerce an arbitrary cell to a number.
///
/// Text handling follows the accounting conventions of the source sheet:
/// thousands separators are stripped, a fully parenthesized value is
/// negative, and anything unparseable maps to `None`. Never errors.
pub fn to_num(cell: &CellValue) -> Option<f64> {
    match cell {
        CellValue::Null | CellValue::Date(_) => None,
        CellValue::Number(f) if f.is_nan() => None,
        CellValue::Number(f) => Some(*f),
        CellValue::Int(i) => Some(*i as f64),
        CellValue::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        CellValue::Text(s) => parse_amount(s),
    }
}

fn parse_amount(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("nan") {
        return None;
    }
    let no_commas = trimmed.replace(',', "");
    let mut body = no_commas.as_str();
    let negated = body.len() >= 2 && body.starts_with('(') && body.ends_with(')');
    if negated {
        body = &body[1..body.len() - 1];
    }
    let cleaned: String = body
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();
    let value: f64 = cleaned.parse().ok()?;
    Some(if negated { -value } else { value })
}

/// Parse a cell as a calendar date; unparseable values are `None`, not errors.
fn parse_date(cell: &CellValue) -> Option<NaiveDate> {
    match cell {
        CellValue::Date(d) => Some(*d),
        CellValue::Text(s) => {
            let s = s.trim();
            if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S") {
                return Some(dt.date());
            }
            DATE_FORMATS
                .iter()
                .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
        }
        _ => None,
    }
}

#[derive(Clone, Copy)]
enum RefMarker {
    Debit,
    Credit,
}

fn ref_marker(cell: &CellValue) -> Option<RefMarker> {
    let CellValue::Text(s) = cell else {
        return None;
    };
    match s.trim().to_lowercase().as_str() {
        "dr" => Some(RefMarker::Debit),
        "cr" => Some(RefMarker::Credit),
        _ => None,
    }
}

/// Derive `(amount_signed, direction)` for one row from its Ref marker and
/// normalized flow amount.
fn signed_amount(ref_cell: &CellValue, flow_cell: &CellValue) -> (CellValue, CellValue) {
    let marker = ref_marker(ref_cell);
    let direction = match marker {
        Some(RefMarker::Debit) => CellValue::Text("outflow".to_string()),
        Some(RefMarker::Credit) => CellValue::Text("inflow".to_string()),
        None => CellValue::Null,
    };
    let amount = match flow_cell {
        CellValue::Number(amt) => match marker {
            Some(RefMarker::Debit) => CellValue::Number(-amt.abs()),
            Some(RefMarker::Credit) => CellValue::Number(amt.abs()),
            None => CellValue::Number(*amt),
        },
        _ => CellValue::Null,
    };
    (amount, direction)
}

/// Normalize a cleaned sheet into dashboard rows.
///
/// Applies date and monetary normalization in place, appends the two derived
/// columns, then projects every row onto the allow-list intersection.
pub fn normalize_table(mut table: SheetTable) -> NormalizedTable {
    if let Some(idx) = table.column_index("Date") {
        for row in &mut table.rows {
            row[idx] = match parse_date(&row[idx]) {
                Some(d) => CellValue::Date(d),
                None => CellValue::Null,
            };
        }
    }

    for col in ["Funds Flow", "Balance"] {
        if let Some(idx) = table.column_index(col) {
            for row in &mut table.rows {
                row[idx] = match to_num(&row[idx]) {
                    Some(v) => CellValue::Number(v),
                    None => CellValue::Null,
                };
            }
        }
    }

    // Derived columns. With Ref or Funds Flow missing this degrades to the
    // raw flow value and a null direction rather than failing; the dashboard
    // relies on that shape.
    let ref_idx = table.column_index("Ref");
    let flow_idx = table.column_index("Funds Flow");
    let derived: Vec<(CellValue, CellValue)> = match (ref_idx, flow_idx) {
        (Some(r), Some(f)) => table
            .rows
            .iter()
            .map(|row| signed_amount(&row[r], &row[f]))
            .collect(),
        _ => table
            .rows
            .iter()
            .map(|row| {
                let amount = flow_idx.map_or(CellValue::Null, |f| row[f].clone());
                (amount, CellValue::Null)
            })
            .collect(),
    };
    table.headers.push("amount_signed".to_string());
    table.headers.push("direction".to_string());
    for (row, (amount, direction)) in table.rows.iter_mut().zip(derived) {
        row.push(amount);
        row.push(direction);
    }

    let (date_min, date_max) = date_extremes(&table);

    // Allow-list order decides the output shape, never sheet order.
    let selected: Vec<(String, usize)> = OUTPUT_COLUMNS
        .iter()
        .filter_map(|name| table.column_index(name).map(|idx| (name.to_string(), idx)))
        .collect();
    let cols_present: Vec<String> = selected.iter().map(|(name, _)| name.clone()).collect();

    let rows: Vec<Map<String, Value>> = table
        .rows
        .iter()
        .map(|row| {
            selected
                .iter()
                .map(|(name, idx)| (name.clone(), row[*idx].to_json()))
                .collect()
        })
        .collect();

    NormalizedTable {
        cols_present,
        rows,
        date_min,
        date_max,
    }
}

fn date_extremes(table: &SheetTable) -> (Option<NaiveDate>, Option<NaiveDate>) {
    let Some(idx) = table.column_index("Date") else {
        return (None, None);
    };
    let mut min: Option<NaiveDate> = None;
    let mut max: Option<NaiveDate> = None;
    for row in &table.rows {
        if let CellValue::Date(d) = &row[idx] {
            let d = *d;
            min = Some(min.map_or(d, |m| m.min(d)));
            max = Some(max.map_or(d, |m| m.max(d)));
        }
    }
    (min, max)
}

/// Build the dataset metadata block.
///
/// The clock reading is passed in explicitly so runs can be made
/// deterministic under test.
pub fn build_meta(
    dataset: &NormalizedTable,
    excel_path: &Path,
    sheet: &str,
    generated_at: DateTime<Utc>,
) -> DatasetMeta {
    DatasetMeta {
        generated_at: generated_at.format("%Y-%m-%dT%H:%M:%SZ").to_string(),
        source_excel: excel_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default(),
        sheet: sheet.to_string(),
        row_count: dataset.rows.len(),
        date_min: dataset.date_min.map(|d| d.format("%Y-%m-%d").to_string()),
        date_max: dataset.date_max.map(|d| d.format("%Y-%m-%d").to_string()),
        columns: dataset.cols_present.clone(),
    }
}
