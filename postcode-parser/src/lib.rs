//! # postcode
//!
//! A parser for UK postcodes.
//!
//! Splits a postcode into its outward code (area and district, e.g. `CR0`)
//! and inward code (sector and unit, e.g. `2YR`), validating the outward
//! code against the registered postal zones on the way. Validation is
//! structural only: a postcode can match every formation rule and still not
//! be deliverable, and this library makes no attempt to check the latter.
//!
//! ```rust
//! use postcode_parser::postcode::parse_uk_postcode;
//!
//! let (outcode, incode) = parse_uk_postcode("cr0 2yr", true, true).unwrap();
//! assert_eq!(outcode, "CR0");
//! assert_eq!(incode, "2YR");
//! ```

pub mod postcode;
