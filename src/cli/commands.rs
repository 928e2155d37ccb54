use crate::core::{build_meta, normalize_table};
use crate::error::FlowResult;
use crate::excel::SheetReader;
use crate::writer;
use chrono::{DateTime, Utc};
use colored::Colorize;
use std::path::PathBuf;

/// Execute the convert command with the current wall clock.
pub fn convert(excel: PathBuf, sheet: String, out: PathBuf, meta: PathBuf) -> FlowResult<()> {
    convert_at(excel, sheet, out, meta, Utc::now())
}

/// Execute the convert command with an explicit clock reading.
///
/// Split out so tests can pin `generated_at` and compare runs byte for byte.
pub fn convert_at(
    excel: PathBuf,
    sheet: String,
    out: PathBuf,
    meta_path: PathBuf,
    generated_at: DateTime<Utc>,
) -> FlowResult<()> {
    let table = SheetReader::new(&excel).read_sheet(&sheet)?;
    let dataset = normalize_table(table);
    let meta = build_meta(&dataset, &excel, &sheet, generated_at);

    writer::write_dataset(&out, &meta_path, &meta, &dataset.rows)?;

    println!(
        "{} {} ({} rows)",
        "Wrote".bold().green(),
        out.display(),
        meta.row_count
    );
    println!("{} {}", "Wrote".bold().green(), meta_path.display());

    Ok(())
}
