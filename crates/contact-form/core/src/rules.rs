// File: src/rules.rs
// Purpose: Pure validation predicates (no DOM access)

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::FieldError;
use crate::field::{FieldKind, FieldSnapshot};

// local@domain.tld with no whitespace and a single @
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

// ASCII only; `\d` would also accept full-width and other Unicode digits
static DIGIT_ONLY_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+$").unwrap());

const TEL_MIN_DIGITS: usize = 10;
const TEL_MAX_DIGITS: usize = 11;

/// Validate email format. The value is trimmed first; an empty value fails
/// the format check, callers decide whether empty means "required".
pub fn check_email(value: &str) -> Result<(), FieldError> {
    if EMAIL_REGEX.is_match(value.trim()) {
        Ok(())
    } else {
        Err(FieldError::EmailFormat)
    }
}

/// Validate a Japanese phone number.
///
/// Hyphens are optional. Empty input is valid because the phone field is
/// never required on the contact form.
pub fn check_tel(value: &str) -> Result<(), FieldError> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(());
    }

    let digits = value.replace('-', "");

    if !DIGIT_ONLY_REGEX.is_match(&digits) {
        return Err(FieldError::TelFormat);
    }

    if !(TEL_MIN_DIGITS..=TEL_MAX_DIGITS).contains(&digits.len()) {
        return Err(FieldError::TelLength);
    }

    Ok(())
}

/// Required check for a single control.
///
/// `group_checked` is only consulted for radio buttons: whether any control
/// sharing the radio's name is checked.
pub fn check_required(field: &FieldSnapshot, group_checked: bool) -> Result<(), FieldError> {
    let present = match field.kind {
        FieldKind::Checkbox => field.checked,
        FieldKind::Radio => group_checked,
        _ => !field.is_blank(),
    };

    if present {
        Ok(())
    } else {
        Err(FieldError::Required)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        assert!(check_email("user@example.com").is_ok());
        assert!(check_email("  user@example.co.jp ").is_ok());
        assert!(check_email("a+b@c.d").is_ok());
    }

    #[test]
    fn test_invalid_emails() {
        assert_eq!(check_email("foo"), Err(FieldError::EmailFormat));
        assert_eq!(check_email("a@b"), Err(FieldError::EmailFormat));
        assert_eq!(check_email("a@@b.com"), Err(FieldError::EmailFormat));
        assert_eq!(check_email("a b@c.com"), Err(FieldError::EmailFormat));
        assert_eq!(check_email(""), Err(FieldError::EmailFormat));
    }

    #[test]
    fn test_tel_valid() {
        assert!(check_tel("090-1234-5678").is_ok());
        assert!(check_tel("0901234567").is_ok());
        assert!(check_tel("03-1234-5678").is_ok());
        assert!(check_tel("").is_ok());
        assert!(check_tel("   ").is_ok());
    }

    #[test]
    fn test_tel_length() {
        assert_eq!(check_tel("12345"), Err(FieldError::TelLength));
        assert_eq!(check_tel("090-1234-56789"), Err(FieldError::TelLength));
        assert_eq!(check_tel("---"), Err(FieldError::TelFormat));
    }

    #[test]
    fn test_tel_format() {
        assert_eq!(check_tel("090-abcd-5678"), Err(FieldError::TelFormat));
        assert_eq!(check_tel("090 1234 5678"), Err(FieldError::TelFormat));
        assert_eq!(check_tel("０９０１２３４５６７８"), Err(FieldError::TelFormat));
    }

    #[test]
    fn test_required_text() {
        let empty = FieldSnapshot::new("name", FieldKind::Text).value("   ");
        let filled = FieldSnapshot::new("name", FieldKind::Text).value("山田");
        assert_eq!(check_required(&empty, false), Err(FieldError::Required));
        assert!(check_required(&filled, false).is_ok());
    }

    #[test]
    fn test_required_checkbox() {
        let unchecked = FieldSnapshot::new("agree", FieldKind::Checkbox);
        assert_eq!(check_required(&unchecked, true), Err(FieldError::Required));
        assert!(check_required(&unchecked.checked(true), false).is_ok());
    }

    #[test]
    fn test_required_radio_uses_group() {
        let radio = FieldSnapshot::new("plan", FieldKind::Radio);
        assert_eq!(check_required(&radio, false), Err(FieldError::Required));
        assert!(check_required(&radio, true).is_ok());
    }
}
