//! Printing operations for emitting rows to an output stream.
//!
//! These are the imperative entry points over the [`Rows`](crate::Rows)
//! display wrapper: they validate the requested width before producing any
//! output, then write the partitioned rows to a writer or to stdout.

use std::fmt;
use std::io::{self, Write};

use crate::display::Rows;
use crate::error::Result;
use crate::params::RowWidth;

/// Write the elements of `items` in rows of `width` to `writer`.
///
/// Partitions `items` into consecutive chunks of `width` elements (the final
/// chunk may be shorter) and writes each chunk as one line, elements joined
/// by `", "`. An empty sequence writes nothing.
///
/// Returns [`RowError::InvalidRowWidth`](crate::RowError::InvalidRowWidth)
/// for a width of zero, before anything is written; write failures from the
/// underlying stream surface as [`RowError::Io`](crate::RowError::Io).
///
/// # Examples
///
/// ```rust
/// use rowfmt_core::printer::write_rows;
///
/// let mut out = Vec::new();
/// write_rows(&mut out, &[1, 2, 3, 4, 5], 2).unwrap();
/// assert_eq!(String::from_utf8(out).unwrap(), "1, 2\n3, 4\n5\n");
/// ```
pub fn write_rows<W, T>(writer: &mut W, items: &[T], width: usize) -> Result<()>
where
    W: Write,
    T: fmt::Display,
{
    let width = RowWidth::new(width)?;
    write!(writer, "{}", Rows::new(items, width))?;
    Ok(())
}

/// Print the elements of `items` in rows of `width` to standard output.
///
/// This is the convenience form of [`write_rows`] for terminal output. The
/// stdout handle is locked for the duration of the call so rows from one
/// invocation are never interleaved with other output.
pub fn print_rows<T: fmt::Display>(items: &[T], width: usize) -> Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_rows(&mut handle, items, width)
}
