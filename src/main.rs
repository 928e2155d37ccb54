use clap::Parser;
use fundflow::cli;
use fundflow::error::FlowResult;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "fundflow")]
#[command(about = "Convert an accounts-flow Excel workbook to dashboard JSON")]
#[command(long_about = "fundflow - accounts-flow Excel → dashboard JSON

Reads one worksheet, cleans its columns, derives the signed flow amount
(Dr → outflow, Cr → inflow) and writes two files: a combined {meta, rows}
document and a standalone pretty-printed meta document.

EXAMPLE:
  fundflow --excel accounts.xlsx --out docs/data/fund_flow.json --meta docs/data/meta.json")]
#[command(version)]
struct Cli {
    /// Path to the source .xlsx workbook
    #[arg(long)]
    excel: PathBuf,

    /// Worksheet name to read
    #[arg(long, default_value = "account flow")]
    sheet: String,

    /// Output path for the combined rows + meta JSON
    #[arg(long)]
    out: PathBuf,

    /// Output path for the standalone meta JSON
    #[arg(long)]
    meta: PathBuf,
}

fn main() -> FlowResult<()> {
    let cli = Cli::parse();
    cli::convert(cli.excel, cli.sheet, cli.out, cli.meta)
}
