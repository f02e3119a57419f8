//! Character variety section - checks for uppercase, lowercase, digits, special chars.

use secrecy::{ExposeSecret, SecretString};

use super::SectionResult;
use crate::strength::Requirement;

/// Checks which character classes the password is missing.
///
/// Classes are ASCII: anything outside `[A-Za-z0-9]` counts as special,
/// including non-ASCII letters.
pub fn character_variety_section(password: &SecretString) -> SectionResult {
    let pwd = password.expose_secret();
    let has_upper = pwd.chars().any(|c| c.is_ascii_uppercase());
    let has_lower = pwd.chars().any(|c| c.is_ascii_lowercase());
    let has_digit = pwd.chars().any(|c| c.is_ascii_digit());
    let has_special = pwd.chars().any(|c| !c.is_ascii_alphanumeric());

    [
        (has_upper, Requirement::Uppercase),
        (has_lower, Requirement::Lowercase),
        (has_digit, Requirement::Digit),
        (has_special, Requirement::Special),
    ]
    .into_iter()
    .filter(|(met, _)| !met)
    .map(|(_, requirement)| requirement)
    .collect()
}
