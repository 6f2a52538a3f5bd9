//! Parameter structures for row formatting operations
//!
//! This module contains framework-free parameter types that can be used across
//! different interfaces (CLI, library callers, future front ends) without
//! interface-specific derives or dependencies. Validation happens at
//! construction, so downstream code never sees a degenerate value.

use std::fmt;

use crate::error::{Result, RowError};

/// Validated row width: the maximum number of elements per output line.
///
/// A width of zero would make the partition loop either hang or silently
/// produce nothing, so construction rejects it up front and formatting code
/// can rely on the value being at least 1.
///
/// # Examples
///
/// ```rust
/// use rowfmt_core::params::RowWidth;
///
/// let width = RowWidth::new(3).unwrap();
/// assert_eq!(width.get(), 3);
///
/// assert!(RowWidth::new(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowWidth(usize);

impl RowWidth {
    /// Create a validated row width.
    ///
    /// Returns [`RowError::InvalidRowWidth`] when `width` is zero.
    pub fn new(width: usize) -> Result<Self> {
        if width == 0 {
            return Err(RowError::invalid_row_width(width));
        }
        Ok(Self(width))
    }

    /// Get the underlying width value. Guaranteed to be at least 1.
    pub fn get(self) -> usize {
        self.0
    }
}

impl TryFrom<usize> for RowWidth {
    type Error = RowError;

    fn try_from(width: usize) -> Result<Self> {
        Self::new(width)
    }
}

impl fmt::Display for RowWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
