//! Length section - checks password minimum length.

use secrecy::{ExposeSecret, SecretString};

use super::SectionResult;
use crate::strength::{MIN_LENGTH, Requirement};

/// Checks if the password meets the minimum length.
///
/// Length is counted in characters, not bytes.
pub fn length_section(password: &SecretString) -> SectionResult {
    if password.expose_secret().chars().count() < MIN_LENGTH {
        return vec![Requirement::MinLength];
    }
    Vec::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_section_too_short() {
        let pwd = SecretString::new("Short1!".to_string().into());
        assert_eq!(length_section(&pwd), vec![Requirement::MinLength]);
    }

    #[test]
    fn test_length_section_exactly_minimum() {
        let pwd = SecretString::new("12345678".to_string().into());
        assert!(length_section(&pwd).is_empty());
    }

    #[test]
    fn test_length_section_counts_chars_not_bytes() {
        // 7 characters, 14 bytes
        let pwd = SecretString::new("ééééééé".to_string().into());
        assert_eq!(length_section(&pwd), vec![Requirement::MinLength]);
    }

    #[test]
    fn test_length_section_empty() {
        let pwd = SecretString::new("".to_string().into());
        assert_eq!(length_section(&pwd), vec![Requirement::MinLength]);
    }
}
