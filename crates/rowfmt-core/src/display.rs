//! Display wrapper types for formatting sequences into rows.
//!
//! This module provides wrapper types that implement Display for ordered
//! sequences, enabling consistent row-based formatting across different
//! output contexts (terminal, buffers, tests).
//!
//! Instead of implementing Display on caller-owned collections, a wrapper
//! borrows the sequence together with its formatting parameters and renders
//! lazily through [`std::fmt::Display`]. The same data can therefore be
//! rendered with or without a title header, or with a different separator,
//! without copying it.

use std::fmt;

use crate::params::RowWidth;

/// Default separator placed between elements within a row.
pub const DEFAULT_SEPARATOR: &str = ", ";

/// Wrapper type for displaying a sequence as fixed-width rows.
///
/// The wrapper partitions the borrowed slice into consecutive chunks of
/// `width` elements (the final chunk may be shorter) and renders each chunk
/// as one line, elements joined by the separator. An empty sequence renders
/// as nothing at all.
///
/// # Examples
///
/// ```rust
/// use rowfmt_core::{params::RowWidth, Rows};
///
/// let items = [1, 2, 3, 4, 5];
/// let width = RowWidth::new(2).unwrap();
///
/// let rows = Rows::new(&items, width);
/// assert_eq!(format!("{}", rows), "1, 2\n3, 4\n5\n");
///
/// // With a title header
/// let titled = Rows::with_title(&items, width, "Numbers");
/// assert!(format!("{}", titled).starts_with("# Numbers\n"));
/// ```
pub struct Rows<'a, T> {
    items: &'a [T],
    width: RowWidth,
    separator: &'a str,
    title: Option<&'a str>,
}

impl<'a, T: fmt::Display> Rows<'a, T> {
    /// Create a new Rows wrapper.
    pub fn new(items: &'a [T], width: RowWidth) -> Self {
        Self {
            items,
            width,
            separator: DEFAULT_SEPARATOR,
            title: None,
        }
    }

    /// Create a Rows wrapper with a title header.
    pub fn with_title(items: &'a [T], width: RowWidth, title: &'a str) -> Self {
        Self {
            items,
            width,
            separator: DEFAULT_SEPARATOR,
            title: Some(title),
        }
    }

    /// Override the element separator (defaults to `", "`).
    pub fn separator(mut self, separator: &'a str) -> Self {
        self.separator = separator;
        self
    }

    /// Check if the wrapped sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get the number of rows this wrapper will render.
    pub fn row_count(&self) -> usize {
        let width = self.width.get();
        (self.items.len() + width - 1) / width
    }
}

impl<T: fmt::Display> fmt::Display for Rows<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(title) = self.title {
            writeln!(f, "# {title}")?;
            writeln!(f)?;
        }

        for chunk in self.items.chunks(self.width.get()) {
            for (i, item) in chunk.iter().enumerate() {
                if i > 0 {
                    write!(f, "{}", self.separator)?;
                }
                write!(f, "{item}")?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
