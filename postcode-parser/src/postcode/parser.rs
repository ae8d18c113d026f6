//! Strict and lenient postcode parsing
//!
//! Normalizes the input (all whitespace stripped, uppercased), enforces the
//! seven-character cap, and then either validates against the compiled
//! grammar (strict) or splits purely by position (lenient). The routine is
//! a pure function of its inputs; the only shared state is the compiled
//! grammar, built once and read-only afterwards.

use crate::postcode::error::PostcodeError;
use crate::postcode::grammar::{POSTCODE_REGEX, STANDALONE_OUTCODE_REGEX};
use serde::Serialize;
use std::str::FromStr;

/// A parsed UK postcode, split into outward and inward codes.
///
/// Both parts are uppercase with no internal whitespace. The inward code is
/// empty when the input held only an outward code and the caller permitted
/// that.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Postcode {
    outcode: String,
    incode: String,
}

impl Postcode {
    /// Parse `input` with the given modes. See [`parse_uk_postcode`] for
    /// the contract.
    pub fn parse(input: &str, strict: bool, incode_mandatory: bool) -> Result<Self, PostcodeError> {
        parse_uk_postcode(input, strict, incode_mandatory)
            .map(|(outcode, incode)| Postcode { outcode, incode })
    }

    /// The outward code: postal area and district, e.g. `CR0`.
    pub fn outcode(&self) -> &str {
        &self.outcode
    }

    /// The inward code: sector and unit, e.g. `2YR`. Empty if only an
    /// outward code was supplied.
    pub fn incode(&self) -> &str {
        &self.incode
    }

    pub fn is_outcode_only(&self) -> bool {
        self.incode.is_empty()
    }
}

impl FromStr for Postcode {
    type Err = PostcodeError;

    /// Strict parse requiring a full postcode, the common case for
    /// validating user input.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Postcode::parse(s, true, true)
    }
}

/// Split a UK postcode into outcode and incode portions.
///
/// The input is normalized first: every whitespace character is removed
/// (not just trimmed at the ends) and the remainder is uppercased. A
/// normalized input longer than seven characters fails with
/// [`PostcodeError::MaxLengthExceeded`] in either mode.
///
/// With `strict` set, the postcode is validated against the formation
/// rules published by the Universal Postal Union and the UK Government
/// Data Standards Catalogue; anything that matches no full or outward-only
/// shape fails with [`PostcodeError::InvalidPostcode`]. Without it, the
/// normalized string is split purely by position and no zone validation
/// happens at all.
///
/// With `incode_mandatory` set, input carrying only an outward code fails
/// with [`PostcodeError::IncodeNotFound`] instead of returning an empty
/// incode.
///
/// ```rust
/// use postcode_parser::postcode::{parse_uk_postcode, PostcodeError};
///
/// assert_eq!(
///     parse_uk_postcode("cr0 2yr", true, true),
///     Ok(("CR0".to_string(), "2YR".to_string()))
/// );
/// assert_eq!(
///     parse_uk_postcode("cr0", true, true),
///     Err(PostcodeError::IncodeNotFound)
/// );
/// assert_eq!(
///     parse_uk_postcode("cr0", false, false),
///     Ok(("CR0".to_string(), String::new()))
/// );
/// ```
pub fn parse_uk_postcode(
    postcode: &str,
    strict: bool,
    incode_mandatory: bool,
) -> Result<(String, String), PostcodeError> {
    let postcode = normalize(postcode);
    let length = postcode.chars().count();

    // The cap applies in both modes, before any other rule.
    if length > 7 {
        return Err(PostcodeError::MaxLengthExceeded { length });
    }

    if strict {
        parse_strict(&postcode, incode_mandatory)
    } else {
        parse_lenient(postcode, length, incode_mandatory)
    }
}

fn normalize(postcode: &str) -> String {
    postcode
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_uppercase)
        .collect()
}

fn parse_strict(
    postcode: &str,
    incode_mandatory: bool,
) -> Result<(String, String), PostcodeError> {
    // Full postcode match
    if let Some(caps) = POSTCODE_REGEX.captures(postcode) {
        return Ok((caps[1].to_string(), caps[2].to_string()));
    }

    // Outcode only match
    if let Some(caps) = STANDALONE_OUTCODE_REGEX.captures(postcode) {
        if incode_mandatory {
            return Err(PostcodeError::IncodeNotFound);
        }
        return Ok((caps[1].to_string(), String::new()));
    }

    // Girobank, the one postcode outside the zone grammar
    match postcode {
        "GIR0AA" => Ok(("GIR".to_string(), "0AA".to_string())),
        "GIR" if incode_mandatory => Err(PostcodeError::IncodeNotFound),
        "GIR" => Ok(("GIR".to_string(), String::new())),
        _ => Err(PostcodeError::InvalidPostcode {
            postcode: postcode.to_string(),
        }),
    }
}

/// Chop up whatever we were given: the last three characters are the
/// incode if there is room for them, everything before is the outcode.
fn parse_lenient(
    postcode: String,
    length: usize,
    incode_mandatory: bool,
) -> Result<(String, String), PostcodeError> {
    if length <= 4 {
        if incode_mandatory {
            return Err(PostcodeError::IncodeNotFound);
        }
        return Ok((postcode, String::new()));
    }

    // Split on char boundaries; lenient input is not necessarily ASCII.
    let split = postcode
        .char_indices()
        .nth(length - 3)
        .map(|(index, _)| index)
        .unwrap_or(postcode.len());
    let incode = postcode[split..].to_string();
    let mut outcode = postcode;
    outcode.truncate(split);
    Ok((outcode, incode))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_strips_all_whitespace_and_uppercases() {
        assert_eq!(normalize(" c r 0\t2y r \n"), "CR02YR");
        assert_eq!(normalize("CR02YR"), "CR02YR");
    }

    #[test]
    fn length_cap_counts_chars_not_bytes() {
        // Seven multi-byte chars pass the cap and fall through to
        // validation; they can fail but must not panic.
        let result = parse_uk_postcode("ÀÀÀÀÀÀÀ", true, true);
        assert!(matches!(result, Err(PostcodeError::InvalidPostcode { .. })));

        let result = parse_uk_postcode("ÀÀÀÀÀÀÀÀ", true, true);
        assert_eq!(result, Err(PostcodeError::MaxLengthExceeded { length: 8 }));
    }

    #[test]
    fn lenient_split_is_purely_positional() {
        assert_eq!(
            parse_uk_postcode("20 2yr", false, true),
            Ok(("20".to_string(), "2YR".to_string()))
        );
        // Non-ASCII splits on char boundaries rather than panicking.
        assert_eq!(
            parse_uk_postcode("ààà2yr", false, true),
            Ok(("ÀÀÀ".to_string(), "2YR".to_string()))
        );
    }

    #[test]
    fn parsing_a_parsed_result_is_idempotent() {
        let (outcode, incode) = parse_uk_postcode("cr0 2yr", true, true).unwrap();
        let rejoined = format!("{outcode}{incode}");
        assert_eq!(
            parse_uk_postcode(&rejoined, true, true),
            Ok((outcode, incode))
        );
    }

    #[test]
    fn from_str_is_the_strict_defaulted_form() {
        let postcode: Postcode = "ec1a 1hq".parse().unwrap();
        assert_eq!(postcode.outcode(), "EC1A");
        assert_eq!(postcode.incode(), "1HQ");
        assert!(!postcode.is_outcode_only());

        assert_eq!("cr0".parse::<Postcode>(), Err(PostcodeError::IncodeNotFound));
    }

    #[test]
    fn postcode_serializes_with_named_fields() {
        let postcode = Postcode::parse("cr0 2yr", true, true).unwrap();
        let json = serde_json::to_value(&postcode).unwrap();
        assert_eq!(json["outcode"], "CR0");
        assert_eq!(json["incode"], "2YR");
    }
}
