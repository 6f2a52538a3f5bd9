//! Core library for the rowfmt fixed-width row formatter.
//!
//! This crate provides the formatting logic for partitioning an ordered
//! sequence of printable values into fixed-width rows, along with typed
//! errors and validated parameters.
//!
//! # Display Architecture
//!
//! Formatting follows a Display-wrapper architecture:
//!
//! - **Parameters** ([`params`]): [`RowWidth`] validates the row width at
//!   construction, so formatting code never sees a zero width
//! - **Display Wrappers** ([`display`]): [`Rows`] borrows a sequence and
//!   renders it lazily through [`std::fmt::Display`]
//! - **Printing Operations** ([`printer`]): [`write_rows`] and [`print_rows`]
//!   validate, format, and emit in one call
//!
//! This separation lets the same sequence be rendered into any writer, with
//! or without a title header, while all output goes through one partitioning
//! implementation.
//!
//! # Quick Start
//!
//! ```rust
//! use rowfmt_core::print_rows;
//!
//! # fn example() -> rowfmt_core::Result<()> {
//! // Print five numbers, two per line
//! print_rows(&[1, 2, 3, 4, 5], 2)?;
//! // 1, 2
//! // 3, 4
//! // 5
//! # Ok(())
//! # }
//! ```

pub mod display;
pub mod error;
pub mod params;
pub mod printer;

// Re-export commonly used types
pub use display::{Rows, DEFAULT_SEPARATOR};
pub use error::{Result, RowError};
pub use params::RowWidth;
pub use printer::{print_rows, write_rows};
