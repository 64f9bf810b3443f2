//! GSTIN structural and check-character validation.

use std::fmt;

use crate::core::states;

/// Error returned when a GSTIN fails format validation.
#[derive(Debug, Clone)]
pub struct GstinError {
    /// The invalid input value.
    pub value: String,
    /// Why the value failed validation.
    pub reason: String,
}

impl fmt::Display for GstinError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid GSTIN '{}': {}", self.value, self.reason)
    }
}

impl std::error::Error for GstinError {}

/// The structural parts of a valid GSTIN.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GstinParts<'a> {
    /// 2-digit GST state code (characters 1-2).
    pub state_code: &'a str,
    /// The holder's PAN (characters 3-12).
    pub pan: &'a str,
    /// Entity code within the state (character 13).
    pub entity_code: char,
}

const CHECKSUM_CHARSET: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Validate a GSTIN by structure and check character (no network call).
///
/// The 15-character layout is: 2-digit state code, 10-character PAN,
/// entity code, the literal 'Z', and a mod-36 check character.
/// Returns the structural parts on success.
pub fn validate_gstin(gstin: &str) -> Result<GstinParts<'_>, GstinError> {
    let gstin = gstin.trim();
    if gstin.len() != 15 {
        return Err(GstinError {
            value: gstin.into(),
            reason: format!("must be 15 characters, got {}", gstin.len()),
        });
    }
    if !gstin
        .chars()
        .all(|c| c.is_ascii_digit() || c.is_ascii_uppercase())
    {
        return Err(GstinError {
            value: gstin.into(),
            reason: "must be uppercase alphanumeric".into(),
        });
    }

    let state_code = &gstin[..2];
    if !state_code.chars().all(|c| c.is_ascii_digit()) {
        return Err(GstinError {
            value: gstin.into(),
            reason: format!("state code '{state_code}' must be numeric"),
        });
    }
    if !states::is_known_state_code(state_code) {
        return Err(GstinError {
            value: gstin.into(),
            reason: format!("unknown state code '{state_code}'"),
        });
    }

    let pan = &gstin[2..12];
    let pan_bytes = pan.as_bytes();
    let pan_ok = pan_bytes[..5].iter().all(|b| b.is_ascii_uppercase())
        && pan_bytes[5..9].iter().all(|b| b.is_ascii_digit())
        && pan_bytes[9].is_ascii_uppercase();
    if !pan_ok {
        return Err(GstinError {
            value: gstin.into(),
            reason: format!("characters 3-12 must form a PAN (AAAAA9999A), got '{pan}'"),
        });
    }

    let entity_code = gstin.as_bytes()[12] as char;
    if entity_code == '0' {
        return Err(GstinError {
            value: gstin.into(),
            reason: "entity code (character 13) must not be '0'".into(),
        });
    }

    if gstin.as_bytes()[13] != b'Z' {
        return Err(GstinError {
            value: gstin.into(),
            reason: "character 14 must be 'Z'".into(),
        });
    }

    let check = check_char(&gstin[..14]).ok_or_else(|| GstinError {
        value: gstin.into(),
        reason: "must be uppercase alphanumeric".into(),
    })?;
    if check != gstin.as_bytes()[14] as char {
        return Err(GstinError {
            value: gstin.into(),
            reason: format!("check character mismatch — expected '{check}'"),
        });
    }

    Ok(GstinParts {
        state_code,
        pan,
        entity_code,
    })
}

/// Compute the mod-36 check character over the first 14 characters of a
/// GSTIN. Each character's value is weighted by alternating factors of 2
/// and 1 from the right, with the digit sum of each product accumulated.
/// Returns `None` unless the input is exactly 14 characters from the
/// GSTIN charset.
pub fn check_char(first14: &str) -> Option<char> {
    if first14.len() != 14 {
        return None;
    }
    let mut sum: u32 = 0;
    let mut factor: u32 = 2;
    for byte in first14.bytes().rev() {
        let value = CHECKSUM_CHARSET.iter().position(|&c| c == byte)? as u32;
        let product = value * factor;
        sum += product / 36 + product % 36;
        factor = if factor == 2 { 1 } else { 2 };
    }
    let check = (36 - sum % 36) % 36;
    Some(CHECKSUM_CHARSET[check as usize] as char)
}

/// The registration state a GSTIN belongs to, from its 2-digit prefix.
pub fn state_of(gstin: &str) -> Option<&'static str> {
    states::state_for_code(gstin.trim().get(..2)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    // --- validate_gstin ---

    #[test]
    fn valid_gstin_splits_into_parts() {
        let parts = validate_gstin("27AAPFU0939F1ZV").unwrap();
        assert_eq!(parts.state_code, "27");
        assert_eq!(parts.pan, "AAPFU0939F");
        assert_eq!(parts.entity_code, '1');
    }

    #[test]
    fn more_valid_gstins() {
        assert!(validate_gstin("08AABCT1332L1ZE").is_ok());
        assert!(validate_gstin("07AAACI1681G1ZR").is_ok());
    }

    #[test]
    fn whitespace_trimmed() {
        assert!(validate_gstin("  27AAPFU0939F1ZV  ").is_ok());
    }

    #[test]
    fn wrong_length_rejected() {
        let err = validate_gstin("27AAPFU0939F1Z").unwrap_err();
        assert!(err.reason.contains("15 characters"));
    }

    #[test]
    fn lowercase_rejected() {
        let err = validate_gstin("27aapfu0939f1zv").unwrap_err();
        assert!(err.reason.contains("uppercase"));
    }

    #[test]
    fn unknown_state_code_rejected() {
        let err = validate_gstin("00AAPFU0939F1ZV").unwrap_err();
        assert!(err.reason.contains("state code"));
    }

    #[test]
    fn malformed_pan_rejected() {
        let err = validate_gstin("27AAPF50939F1ZV").unwrap_err();
        assert!(err.reason.contains("PAN"));
    }

    #[test]
    fn zero_entity_code_rejected() {
        let err = validate_gstin("27AAPFU0939F0ZV").unwrap_err();
        assert!(err.reason.contains("entity code"));
    }

    #[test]
    fn fourteenth_char_must_be_z() {
        let err = validate_gstin("27AAPFU0939F1YV").unwrap_err();
        assert!(err.reason.contains("'Z'"));
    }

    #[test]
    fn bad_check_character_rejected() {
        let err = validate_gstin("27AAPFU0939F1ZW").unwrap_err();
        assert!(err.reason.contains("check character"));
    }

    // --- check_char ---

    #[test]
    fn check_char_known_values() {
        assert_eq!(check_char("27AAPFU0939F1Z"), Some('V'));
        assert_eq!(check_char("08AABCT1332L1Z"), Some('E'));
        assert_eq!(check_char("07AAACI1681G1Z"), Some('R'));
    }

    #[test]
    fn check_char_rejects_bad_input() {
        assert_eq!(check_char("27AAPFU0939F1"), None);
        assert_eq!(check_char("27aapfu0939f1z"), None);
    }

    // --- state_of ---

    #[test]
    fn state_prefix_lookup() {
        assert_eq!(state_of("27AAPFU0939F1ZV"), Some("Maharashtra"));
        assert_eq!(state_of("08AABCT1332L1ZE"), Some("Rajasthan"));
        assert_eq!(state_of("00AAPFU0939F1ZV"), None);
        assert_eq!(state_of("2"), None);
    }
}
