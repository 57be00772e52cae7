// align/error.rs
//
// Error taxonomy for the alignment core.

use std::fmt;

/// Errors for alignment and band grouping operations
#[derive(Debug, Clone, PartialEq)]
pub enum AlignError {
    /// A time interval with `start > end`, a negative endpoint, or a
    /// non-finite endpoint. Rejected at construction, never clamped.
    InvalidInterval { start: f64, end: f64 },
    /// A band duration that is not a positive finite number of seconds
    InvalidBandDuration(f64),
}

impl fmt::Display for AlignError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlignError::InvalidInterval { start, end } => {
                write!(f, "Invalid time interval: start={}, end={}", start, end)
            }
            AlignError::InvalidBandDuration(secs) => {
                write!(f, "Invalid band duration: {} seconds", secs)
            }
        }
    }
}

impl std::error::Error for AlignError {}
