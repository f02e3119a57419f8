//! Strength tiers, requirements and evaluation results.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Minimum number of characters for the length requirement.
pub const MIN_LENGTH: usize = 8;

/// Coarse strength tier stored alongside every credential.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PasswordStrength {
    #[default]
    Weak,
    Medium,
    Strong,
}

impl PasswordStrength {
    pub const ALL: [PasswordStrength; 3] = [Self::Weak, Self::Medium, Self::Strong];

    /// Maps a requirement score (0-5) to its tier.
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=2 => Self::Weak,
            3..=4 => Self::Medium,
            _ => Self::Strong,
        }
    }

    /// Lowercase wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Weak => "weak",
            Self::Medium => "medium",
            Self::Strong => "strong",
        }
    }

    /// Capitalized label for display.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Weak => "Weak",
            Self::Medium => "Medium",
            Self::Strong => "Strong",
        }
    }

    /// Fill percentage of the strength meter bar.
    pub fn meter_width(&self) -> u8 {
        match self {
            Self::Weak => 33,
            Self::Medium => 66,
            Self::Strong => 100,
        }
    }
}

impl fmt::Display for PasswordStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown strength tier: {0}")]
pub struct UnknownStrength(pub String);

impl FromStr for PasswordStrength {
    type Err = UnknownStrength;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "weak" => Ok(Self::Weak),
            "medium" => Ok(Self::Medium),
            "strong" => Ok(Self::Strong),
            _ => Err(UnknownStrength(s.to_string())),
        }
    }
}

/// One of the five scored predicates, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Requirement {
    MinLength,
    Uppercase,
    Lowercase,
    Digit,
    Special,
}

impl Requirement {
    pub const ALL: [Requirement; 5] = [
        Self::MinLength,
        Self::Uppercase,
        Self::Lowercase,
        Self::Digit,
        Self::Special,
    ];

    /// Hint shown to the user while the requirement is unmet.
    pub fn description(&self) -> &'static str {
        match self {
            Self::MinLength => "At least 8 characters",
            Self::Uppercase => "One uppercase letter",
            Self::Lowercase => "One lowercase letter",
            Self::Digit => "One number",
            Self::Special => "One special character",
        }
    }
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Result of a full evaluation, as consumed by the interactive meter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordEvaluation {
    /// Number of satisfied requirements; `None` when evaluation was cancelled.
    pub score: Option<u8>,
    /// Unmet requirements in display order.
    pub feedback: Vec<Requirement>,
    /// Whether the evaluated input was empty.
    pub blank: bool,
}

impl PasswordEvaluation {
    pub fn cancelled() -> Self {
        Self {
            score: None,
            feedback: Vec::new(),
            blank: false,
        }
    }

    /// Tier for the evaluated input, `None` if cancelled.
    pub fn strength(&self) -> Option<PasswordStrength> {
        if self.blank {
            return self.score.map(|_| PasswordStrength::Weak);
        }
        self.score.map(PasswordStrength::from_score)
    }

    /// Hints to display. Nothing is shown until the user has typed.
    pub fn hints(&self) -> &[Requirement] {
        if self.blank {
            return &[];
        }
        &self.feedback
    }

    /// Meter fill percentage; an empty or cancelled meter is 0.
    pub fn meter_width(&self) -> u8 {
        if self.blank {
            return 0;
        }
        self.strength().map(|s| s.meter_width()).unwrap_or(0)
    }
}
