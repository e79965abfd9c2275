//! GSTIN format validation.
//!
//! A GSTIN is 15 characters: 2-digit state code, the holder's 10-character
//! PAN, an entity number, the literal `Z`, and a check character.

use std::fmt;

/// Error returned when a GSTIN fails format validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GstinFormatError {
    /// The invalid input value.
    pub value: String,
    /// Why the value failed validation.
    pub reason: String,
}

impl fmt::Display for GstinFormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid GSTIN '{}': {}", self.value, self.reason)
    }
}

impl std::error::Error for GstinFormatError {}

/// State codes 97 (other territory) and 38 (Ladakh) are the upper ends.
const OTHER_TERRITORY: u8 = 97;
const MAX_STATE_CODE: u8 = 38;

/// Validate a GSTIN by format (no checksum verification).
///
/// Returns the (state_code, pan) split on success.
pub fn validate_gstin_format(gstin: &str) -> Result<(&str, &str), GstinFormatError> {
    let gstin = gstin.trim();
    let err = |reason: &str| GstinFormatError {
        value: gstin.into(),
        reason: reason.into(),
    };

    if gstin.len() != 15 || !gstin.is_ascii() {
        return Err(err("must be exactly 15 ASCII characters"));
    }

    let state = &gstin[..2];
    let pan = &gstin[2..12];
    let bytes = gstin.as_bytes();

    let code: u8 = state
        .parse()
        .map_err(|_| err("state code must be 2 digits"))?;
    if !((1..=MAX_STATE_CODE).contains(&code) || code == OTHER_TERRITORY) {
        return Err(err("unknown state code"));
    }

    if !is_pan(pan) {
        return Err(err("characters 3-12 must be a PAN (AAAAA9999A)"));
    }

    let entity = bytes[12];
    if !(entity.is_ascii_uppercase() || (b'1'..=b'9').contains(&entity)) {
        return Err(err("entity number must be 1-9 or A-Z"));
    }

    if bytes[13] != b'Z' {
        return Err(err("14th character must be 'Z'"));
    }

    let check = bytes[14];
    if !(check.is_ascii_uppercase() || check.is_ascii_digit()) {
        return Err(err("check character must be alphanumeric"));
    }

    Ok((state, pan))
}

/// PAN embedded in a GSTIN (characters 3..=12).
///
/// Only the length is checked, so a half-typed GSTIN still yields its PAN
/// portion once it has at least 12 characters.
pub fn pan_from_gstin(gstin: &str) -> Option<String> {
    let gstin = gstin.trim();
    if !gstin.is_ascii() || gstin.len() < 12 {
        return None;
    }
    Some(gstin[2..12].to_string())
}

/// Whether `pan` has the AAAAA9999A shape.
pub fn is_pan(pan: &str) -> bool {
    let b = pan.as_bytes();
    b.len() == 10
        && b[..5].iter().all(u8::is_ascii_uppercase)
        && b[5..9].iter().all(u8::is_ascii_digit)
        && b[9].is_ascii_uppercase()
}
