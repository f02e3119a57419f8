//! Aggregate strength counts.

use crate::record::CredentialRecord;
use crate::strength::PasswordStrength;

/// Per-tier counts over a whole collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StrengthCounts {
    pub weak: usize,
    pub medium: usize,
    pub strong: usize,
    pub total: usize,
}

impl StrengthCounts {
    /// Single pass over `records`; a missing strength counts as weak.
    pub fn from_records<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a CredentialRecord>,
    {
        records.into_iter().fold(Self::default(), |mut acc, r| {
            match r.strength_or_weak() {
                PasswordStrength::Weak => acc.weak += 1,
                PasswordStrength::Medium => acc.medium += 1,
                PasswordStrength::Strong => acc.strong += 1,
            }
            acc.total += 1;
            acc
        })
    }

    pub fn count(&self, tier: PasswordStrength) -> usize {
        match tier {
            PasswordStrength::Weak => self.weak,
            PasswordStrength::Medium => self.medium,
            PasswordStrength::Strong => self.strong,
        }
    }

    /// Share of `tier` in percent, rounded half up. 0 for an empty collection.
    pub fn percent(&self, tier: PasswordStrength) -> u8 {
        if self.total == 0 {
            return 0;
        }
        ((200 * self.count(tier) + self.total) / (2 * self.total)) as u8
    }
}
