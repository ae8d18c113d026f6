//! Grammar Pattern Definitions
//!
//! This module defines the declarative grammar for UK postcode shapes.
//! The grammar is assembled from literal tables (the registered postal
//! zones and three restricted character classes) into regex patterns, and
//! compiled once per process.
//!
//! # Outward code formations
//!
//! 1. `<one-letter zone><digit><third-position char>` — e.g. `W1A`
//! 2. `<one-letter zone><1-2 digits>` — e.g. `M2`, `N16`
//! 3. `<two-letter zone><digit><fourth-position char>` — e.g. `EC1A`
//! 4. `<two-letter zone><1-2 digits>` — e.g. `CR0`, `DN16`
//! 5. `BF1` — British Forces, outside the zone registry
//!
//! The letter class following the district digit depends on whether the
//! zone prefix consumed one or two letters, so the two subsets are encoded
//! as separate alternatives; a single merged pattern would be ambiguous.

use once_cell::sync::Lazy;
use regex::Regex;

/// Registered postal zones: the one- or two-letter prefix naming a postal
/// area. Closed set, per the UPU formation rules for Great Britain.
pub(crate) const POSTAL_ZONES: &[&str] = &[
    "AB", "AL", "B", "BA", "BB", "BD", "BH", "BL", "BN", "BR", //
    "BS", "BT", "CA", "CB", "CF", "CH", "CM", "CO", "CR", "CT", //
    "CV", "CW", "DA", "DD", "DE", "DG", "DH", "DL", "DN", "DT", //
    "DY", "E", "EC", "EH", "EN", "EX", "FK", "FY", "G", "GL", //
    "GY", "GU", "HA", "HD", "HG", "HP", "HR", "HS", "HU", "HX", //
    "IG", "IM", "IP", "IV", "JE", "KA", "KT", "KW", "KY", "L", //
    "LA", "LD", "LE", "LL", "LN", "LS", "LU", "M", "ME", "MK", //
    "ML", "N", "NE", "NG", "NN", "NP", "NR", "NW", "OL", "OX", //
    "PA", "PE", "PH", "PL", "PO", "PR", "RG", "RH", "RM", "S", //
    "SA", "SE", "SG", "SK", "SL", "SM", "SN", "SO", "SP", "SR", //
    "SS", "ST", "SW", "SY", "TA", "TD", "TF", "TN", "TQ", "TR", //
    "TS", "TW", "UB", "W", "WA", "WC", "WD", "WF", "WN", "WR", //
    "WS", "WV", "YO", "ZE",
];

/// Letters permitted after the district digit of a one-letter zone.
pub(crate) const THIRD_POS_CHARS: &[char] = &[
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'J', 'K', 'P', 'S', 'T', 'U', 'W',
];

/// Letters permitted after the district digit of a two-letter zone.
pub(crate) const FOURTH_POS_CHARS: &[char] = &[
    'A', 'B', 'E', 'H', 'M', 'N', 'P', 'R', 'V', 'W', 'X', 'Y',
];

/// Letters permitted in the two unit positions of the inward code.
/// Excludes letters easily confused with digits (C, I, K, M, O, V).
pub(crate) const INCODE_CHARS: &[char] = &[
    'A', 'B', 'D', 'E', 'F', 'G', 'H', 'J', 'L', 'N', 'P', 'Q', 'R', 'S', 'T', 'U', 'W', 'X', 'Y',
    'Z',
];

fn char_class(chars: &[char]) -> String {
    chars.iter().collect()
}

fn zones_of_len(len: usize) -> String {
    POSTAL_ZONES
        .iter()
        .filter(|zone| zone.len() == len)
        .copied()
        .collect::<Vec<_>>()
        .join("|")
}

/// Assemble the outward-code pattern, one capture group around the five
/// alternative formations. Pure: identical output on every call.
pub(crate) fn outcode_pattern() -> String {
    format!(
        r"((?:(?:{one})(?:\d[{third}]|\d{{1,2}}))|(?:(?:{two})(?:\d[{fourth}]|\d{{1,2}}))|(?:BF1))",
        one = zones_of_len(1),
        third = char_class(THIRD_POS_CHARS),
        two = zones_of_len(2),
        fourth = char_class(FOURTH_POS_CHARS),
    )
}

/// Assemble the inward-code pattern: a sector digit and two unit letters,
/// one capture group.
pub(crate) fn incode_pattern() -> String {
    let unit = char_class(INCODE_CHARS);
    format!(r"(\d[{unit}][{unit}])")
}

/// Full postcode: outward immediately followed by inward, anchored at both
/// ends so a match can never leave trailing garbage unconsumed.
pub(crate) static POSTCODE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!("^{}{}$", outcode_pattern(), incode_pattern())).unwrap());

/// Outward code on its own, permitting only trailing whitespace.
pub(crate) static STANDALONE_OUTCODE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!(r"^{}\s*$", outcode_pattern())).unwrap());
