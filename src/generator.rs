//! Random password generation backed by the OS CSPRNG.

use rand::Rng;
use rand::rngs::OsRng;
use secrecy::SecretString;
use thiserror::Error;

use crate::evaluator::classify;
use crate::strength::{MIN_LENGTH, PasswordStrength};

const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const NUMBERS: &str = "0123456789";
const SYMBOLS: &str = "!@#$%^&*";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("Password length must be at least 1")]
    ZeroLength,
    #[error("At least one character class must be enabled")]
    EmptyCharset,
}

/// Options for generating a random password.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorOptions {
    pub length: usize,
    pub uppercase: bool,
    pub lowercase: bool,
    pub numbers: bool,
    pub symbols: bool,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            length: 12,
            uppercase: true,
            lowercase: true,
            numbers: true,
            symbols: true,
        }
    }
}

impl GeneratorOptions {
    fn charset(&self) -> Vec<char> {
        [
            (self.uppercase, UPPERCASE),
            (self.lowercase, LOWERCASE),
            (self.numbers, NUMBERS),
            (self.symbols, SYMBOLS),
        ]
        .into_iter()
        .filter(|(enabled, _)| *enabled)
        .flat_map(|(_, chars)| chars.chars())
        .collect()
    }

    /// Whether every generated password can and must classify as strong.
    fn guarantees_strong(&self) -> bool {
        self.uppercase && self.lowercase && self.numbers && self.symbols && self.length >= MIN_LENGTH
    }
}

/// Generates a random password.
///
/// With every class enabled and a length of at least 8, draws are repeated
/// until the result classifies as strong.
pub fn generate_password(options: &GeneratorOptions) -> Result<SecretString, GeneratorError> {
    if options.length == 0 {
        return Err(GeneratorError::ZeroLength);
    }
    let charset = options.charset();
    if charset.is_empty() {
        return Err(GeneratorError::EmptyCharset);
    }

    let mut rng = OsRng;
    loop {
        let candidate: String = (0..options.length)
            .map(|_| charset[rng.gen_range(0..charset.len())])
            .collect();
        let candidate = SecretString::from(candidate);

        if !options.guarantees_strong() || classify(&candidate) == PasswordStrength::Strong {
            return Ok(candidate);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn test_default_generates_strong() {
        for _ in 0..50 {
            let pwd = generate_password(&GeneratorOptions::default()).unwrap();
            assert_eq!(pwd.expose_secret().chars().count(), 12);
            assert_eq!(classify(&pwd), PasswordStrength::Strong);
        }
    }

    #[test]
    fn test_respects_charset() {
        let options = GeneratorOptions {
            length: 32,
            uppercase: false,
            lowercase: false,
            numbers: true,
            symbols: false,
        };
        let pwd = generate_password(&options).unwrap();
        assert!(pwd.expose_secret().chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_short_length_still_generates() {
        let options = GeneratorOptions {
            length: 4,
            ..Default::default()
        };
        let pwd = generate_password(&options).unwrap();
        assert_eq!(pwd.expose_secret().len(), 4);
    }

    #[test]
    fn test_zero_length_rejected() {
        let options = GeneratorOptions {
            length: 0,
            ..Default::default()
        };
        assert_eq!(generate_password(&options).err(), Some(GeneratorError::ZeroLength));
    }

    #[test]
    fn test_empty_charset_rejected() {
        let options = GeneratorOptions {
            length: 8,
            uppercase: false,
            lowercase: false,
            numbers: false,
            symbols: false,
        };
        assert_eq!(generate_password(&options).err(), Some(GeneratorError::EmptyCharset));
    }
}
