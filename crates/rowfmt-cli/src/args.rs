use clap::Parser;

/// Main command-line interface for the rowfmt row formatter
///
/// Rowfmt prints an ordered sequence of values in fixed-width rows: each
/// output line holds up to `--width` consecutive elements, comma-separated.
/// Values come from positional arguments, or from stdin (one value per line)
/// when no positional arguments are given. With `--json` the input is a
/// single JSON array instead of plain values.
#[derive(Parser)]
#[command(version, about, name = "rowfmt")]
pub struct Args {
    /// Number of elements to print per row (must be at least 1)
    #[arg(short, long)]
    pub width: usize,

    /// Treat the input as a single JSON array instead of plain values
    #[arg(long)]
    pub json: bool,

    /// Separator placed between elements within a row
    #[arg(long, default_value = rowfmt_core::DEFAULT_SEPARATOR)]
    pub separator: String,

    /// Print a `# TITLE` header line before the rows
    #[arg(long)]
    pub title: Option<String>,

    /// Values to print; read from stdin, one per line, when omitted
    pub values: Vec<String>,
}
