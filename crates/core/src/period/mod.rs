//! Monthly period records and lenient numeric intake.

pub mod error;
pub mod types;

pub use error::PeriodError;
pub use types::{PeriodKey, PeriodRecord, RawPeriodInput};
