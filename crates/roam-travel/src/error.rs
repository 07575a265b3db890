//! Travel domain error types.

use chrono::NaiveDate;
use thiserror::Error;

/// Errors that can occur in marketplace operations.
#[derive(Error, Debug)]
pub enum TravelError {
    /// Package not found.
    #[error("Package not found: {0}")]
    PackageNotFound(String),

    /// Agency not found.
    #[error("Agency not found: {0}")]
    AgencyNotFound(String),

    /// The requested departure date is in the past.
    #[error("Departure date {0} has already passed")]
    DateInPast(NaiveDate),

    /// The requested departure date has no remaining slots.
    #[error("No remaining slots on {0}")]
    DateSoldOut(NaiveDate),

    /// The requested departure date is not on the schedule.
    #[error("No departure scheduled on {0}")]
    DateNotScheduled(NaiveDate),

    /// Booking attempted without a selected date.
    #[error("No departure date selected")]
    NoDateSelected,

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Validation error.
    #[error("Validation error: {0}")]
    Validation(String),
}
