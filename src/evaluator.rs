//! Password strength evaluator - main evaluation logic.
//!
//! One rule set drives both the stored `strength` field and the live meter:
//! one point per satisfied requirement, 0-2 weak, 3-4 medium, 5 strong.

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use std::time::Duration;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::sections::{SectionResult, character_variety_section, length_section};
use crate::strength::{PasswordEvaluation, PasswordStrength, Requirement};

type Section = fn(&SecretString) -> SectionResult;

// Section order fixes the feedback order.
const SECTIONS: [(&str, Section); 2] = [
    ("length", length_section),
    ("variety", character_variety_section),
];

/// Classifies a password into its strength tier.
///
/// Total and deterministic; the empty string is always weak.
pub fn classify(password: &SecretString) -> PasswordStrength {
    if password.expose_secret().is_empty() {
        return PasswordStrength::Weak;
    }
    let unmet = feedback(password).len();
    PasswordStrength::from_score(score_from_unmet(unmet))
}

/// Returns the unmet requirements in the fixed order
/// length, uppercase, lowercase, digit, special.
pub fn feedback(password: &SecretString) -> Vec<Requirement> {
    SECTIONS
        .iter()
        .flat_map(|(_, section)| section(password))
        .collect()
}

fn score_from_unmet(unmet: usize) -> u8 {
    (Requirement::ALL.len() - unmet.min(Requirement::ALL.len())) as u8
}

/// Evaluates password strength for the interactive meter.
///
/// # Arguments
/// * `password` - The password to evaluate
/// * `token` - Optional cancellation token (async feature only)
///
/// # Returns
/// A `PasswordEvaluation` with the score and the unmet requirements.
/// A cancelled evaluation carries no score.
pub fn evaluate_password_strength(
    password: &SecretString,
    #[cfg(feature = "async")] token: Option<CancellationToken>,
) -> PasswordEvaluation {
    let mut unmet = Vec::new();

    for (_section_name, section_fn) in SECTIONS {
        // Check cancellation before each section (async only)
        #[cfg(feature = "async")]
        {
            if let Some(ref t) = token {
                if t.is_cancelled() {
                    #[cfg(feature = "tracing")]
                    tracing::debug!("evaluation cancelled before section: {}", _section_name);
                    return PasswordEvaluation::cancelled();
                }
            }
        }

        unmet.extend(section_fn(password));
    }

    PasswordEvaluation {
        score: Some(score_from_unmet(unmet.len())),
        feedback: unmet,
        blank: password.expose_secret().is_empty(),
    }
}

/// Async version that waits out the debounce and sends the result via channel.
///
/// The token is checked after the debounce, so a keystroke that supersedes
/// this one can cancel it before any work is done.
#[cfg(feature = "async")]
pub async fn evaluate_password_strength_tx(
    password: &SecretString,
    token: CancellationToken,
    debounce: Duration,
    tx: mpsc::Sender<PasswordEvaluation>,
) {
    #[cfg(feature = "tracing")]
    tracing::debug!("evaluation is about to start...");

    tokio::time::sleep(debounce).await;
    let evaluation = evaluate_password_strength(password, Some(token));

    if let Err(_e) = tx.send(evaluation).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password evaluation result: {}", _e);
    }
}
