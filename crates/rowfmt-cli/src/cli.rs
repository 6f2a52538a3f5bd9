//! Command execution for the rowfmt binary
//!
//! This module assembles the input sequence from the three supported sources
//! (positional arguments, stdin lines, or a JSON array) and hands it to the
//! core display wrapper for rendering. All input handling stays here; the
//! core crate only ever sees a slice of printable values.

use std::io::{self, BufRead, Read, Write};

use anyhow::{bail, Context, Result};
use log::debug;
use rowfmt_core::{RowWidth, Rows};
use serde_json::Value;

use crate::args::Args;

/// CLI command handler that owns the parsed arguments.
pub struct Cli {
    args: Args,
}

impl Cli {
    /// Create a new CLI handler.
    pub fn new(args: Args) -> Self {
        Self { args }
    }

    /// Execute the formatting run and write the rows to stdout.
    pub fn run(self) -> Result<()> {
        let Args {
            width,
            json,
            separator,
            title,
            values,
        } = self.args;

        let width = RowWidth::new(width)?;

        let items = if json {
            json_items(values)?
        } else if !values.is_empty() {
            values
        } else {
            stdin_items()?
        };

        debug!("Formatting {} values into rows of {}", items.len(), width);

        let rows = match &title {
            Some(title) => Rows::with_title(&items, width, title),
            None => Rows::new(&items, width),
        }
        .separator(&separator);

        let stdout = io::stdout();
        let mut handle = stdout.lock();
        write!(handle, "{rows}").context("Failed to write rows")?;

        Ok(())
    }
}

/// Read input values from stdin, one per line.
fn stdin_items() -> Result<Vec<String>> {
    let stdin = io::stdin();
    stdin
        .lock()
        .lines()
        .collect::<io::Result<Vec<String>>>()
        .context("Failed to read values from stdin")
}

/// Parse a JSON array into the textual representations of its elements.
///
/// The array comes from the single positional argument, or from stdin when
/// no positional argument is given. String elements render without their
/// quotes; every other element keeps its JSON text.
fn json_items(mut values: Vec<String>) -> Result<Vec<String>> {
    let text = match values.len() {
        0 => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read JSON from stdin")?;
            buf
        }
        1 => values.remove(0),
        n => bail!("--json expects a single JSON array argument, got {n}"),
    };

    let value: Value = serde_json::from_str(&text).context("Invalid JSON input")?;

    let Value::Array(elements) = value else {
        bail!("--json input must be a JSON array");
    };

    Ok(elements
        .into_iter()
        .map(|element| match element {
            Value::String(s) => s,
            other => other.to_string(),
        })
        .collect())
}
