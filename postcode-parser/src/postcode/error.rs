//! Error types for postcode parsing

use std::fmt;

/// Errors that can occur while parsing a postcode.
///
/// Every variant denotes an invalid postcode, so matching on the type is
/// the catch-all; `MaxLengthExceeded` and `IncodeNotFound` refine the
/// failure for callers that care which rule was broken.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostcodeError {
    /// Normalized input is longer than the seven characters a postcode can hold
    MaxLengthExceeded { length: usize },
    /// Input holds only an outward code but the caller required an inward code
    IncodeNotFound,
    /// Input does not conform to UK postcode rules
    InvalidPostcode { postcode: String },
}

impl fmt::Display for PostcodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PostcodeError::MaxLengthExceeded { length } => {
                write!(f, "Postcode is {} characters long, maximum is 7", length)
            }
            PostcodeError::IncodeNotFound => write!(f, "Incode mandatory"),
            PostcodeError::InvalidPostcode { postcode } => {
                write!(f, "'{}' does not conform to UK postcode rules", postcode)
            }
        }
    }
}

impl std::error::Error for PostcodeError {}
