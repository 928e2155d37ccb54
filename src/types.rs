use calamine::Data;
use chrono::NaiveDate;
use serde::Serialize;
use serde_json::Value;

//==============================================================================
// Output Column Allow-List
//==============================================================================

/// Columns the dashboard consumes, in serialization order.
///
/// Only columns from this list that are actually present in the cleaned sheet
/// survive into the output (`cols_present`); everything else is discarded.
/// This is the output-shape contract with the static front-end.
pub const OUTPUT_COLUMNS: [&str; 23] = [
    "Ref SN",
    "SN",
    "Date",
    "Description",
    "Funds Flow",
    "Balance",
    "Term",
    "Ref",
    "Bank",
    "Purpose",
    "Instructed By",
    "Transferred to",
    "Cat",
    "Remarks",
    "error check",
    "Co",
    "TMA",
    "TMP",
    "Description.1",
    "Projections",
    "Inv Ref",
    "amount_signed",
    "direction",
];

//==============================================================================
// Cell Values
//==============================================================================

/// A single spreadsheet cell after decoding.
///
/// Closed variant type: every downstream coercion matches on this instead of
/// inspecting calamine's `Data` directly.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Null,
    Text(String),
    Number(f64),
    Int(i64),
    Bool(bool),
    Date(NaiveDate),
}

impl CellValue {
    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }

    /// Serialize for the rows/meta JSON.
    ///
    /// Dates collapse to their calendar day (`YYYY-MM-DD`); NaN floats are
    /// indistinguishable from blanks and serialize as null.
    pub fn to_json(&self) -> Value {
        match self {
            CellValue::Null => Value::Null,
            CellValue::Text(s) => Value::String(s.clone()),
            CellValue::Number(f) => serde_json::Number::from_f64(*f)
                .map(Value::Number)
                .unwrap_or(Value::Null),
            CellValue::Int(i) => Value::from(*i),
            CellValue::Bool(b) => Value::Bool(*b),
            CellValue::Date(d) => Value::String(d.format("%Y-%m-%d").to_string()),
        }
    }
}

impl From<&Data> for CellValue {
    fn from(cell: &Data) -> Self {
        match cell {
            Data::Empty => CellValue::Null,
            Data::String(s) => CellValue::Text(s.clone()),
            Data::Float(f) => CellValue::Number(*f),
            Data::Int(i) => CellValue::Int(*i),
            Data::Bool(b) => CellValue::Bool(*b),
            Data::DateTime(dt) => dt
                .as_datetime()
                .map(|ndt| CellValue::Date(ndt.date()))
                .unwrap_or(CellValue::Null),
            Data::DateTimeIso(s) => s
                .get(..10)
                .and_then(|day| NaiveDate::parse_from_str(day, "%Y-%m-%d").ok())
                .map(CellValue::Date)
                .unwrap_or_else(|| CellValue::Text(s.clone())),
            Data::DurationIso(s) => CellValue::Text(s.clone()),
            Data::Error(_) => CellValue::Null,
        }
    }
}

//==============================================================================
// Sheet Table
//==============================================================================

/// One worksheet after header cleanup: headers in sheet order plus row-major
/// cell data. Placeholder columns (`Unnamed: <n>`) are already gone.
#[derive(Debug, Default)]
pub struct SheetTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
}

impl SheetTable {
    /// Index of the first column with this exact header, if present.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

//==============================================================================
// Dataset Metadata
//==============================================================================

/// Summary block written both into the combined file and standalone.
/// Field order is the serialization order.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DatasetMeta {
    pub generated_at: String,
    pub source_excel: String,
    pub sheet: String,
    pub row_count: usize,
    pub date_min: Option<String>,
    pub date_max: Option<String>,
    pub columns: Vec<String>,
}
