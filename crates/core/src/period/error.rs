//! Period validation errors.

use thiserror::Error;

/// Errors raised when constructing a period key.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PeriodError {
    /// Month outside 1-12.
    #[error("Month must be between 1 and 12, got {0}")]
    InvalidMonth(u32),

    /// Year outside the accepted range.
    #[error("Year {year} is outside the accepted range 2000-{max}")]
    YearOutOfRange {
        /// Rejected year.
        year: i32,
        /// Maximum accepted year (next calendar year).
        max: i32,
    },
}
