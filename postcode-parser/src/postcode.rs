//! Postcode parsing module
//!
//! This module provides the complete path from a raw user-supplied string to
//! a validated outward/inward split:
//!
//! 1. Grammar: the postal-zone table and character classes, assembled once
//!    into compiled patterns. See [grammar](self::grammar).
//! 2. Parsing: normalization and the strict/lenient decision tree. See
//!    [parser](self::parser).
//! 3. Errors: the validation failure taxonomy. See [error](self::error).
//!
//! The grammar is data, not code: patterns are built from literal tables at
//! first use and shared read-only for the life of the process.

pub mod error;
mod grammar;
pub mod parser;

pub use error::PostcodeError;
pub use parser::{parse_uk_postcode, Postcode};
