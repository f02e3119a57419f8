//! Credential records as delivered by the persistence layer.
//!
//! The `strength` field is a cache of [`classify`] over the password at the
//! time of the last write. Every password write goes through
//! [`CredentialRecord::set_password`], which recomputes it; records written
//! under an older rule can be re-derived with
//! [`CredentialRecord::refresh_strength`].

use std::cmp::Reverse;

use chrono::{DateTime, Utc};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::evaluator::classify;
use crate::strength::PasswordStrength;

/// One saved resource/username/password tuple plus metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CredentialRecord {
    pub id: String,
    #[serde(rename = "userId", alias = "uid", default, deserialize_with = "lenient_text")]
    pub owner_id: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub resource_name: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub login_url: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub username: String,
    #[serde(default = "empty_secret", with = "secret_string")]
    pub password: SecretString,
    #[serde(
        default,
        deserialize_with = "lenient_strength",
        skip_serializing_if = "Option::is_none"
    )]
    pub strength: Option<PasswordStrength>,
    /// `None` while the server timestamp is still pending.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl CredentialRecord {
    /// Builds a record and classifies its password.
    pub fn new(
        id: impl Into<String>,
        owner_id: impl Into<String>,
        resource_name: impl Into<String>,
        login_url: impl Into<String>,
        username: impl Into<String>,
        password: SecretString,
        created_at: Option<DateTime<Utc>>,
    ) -> Self {
        let strength = Some(classify(&password));
        Self {
            id: id.into(),
            owner_id: owner_id.into(),
            resource_name: resource_name.into(),
            login_url: login_url.into(),
            username: username.into(),
            password,
            strength,
            created_at,
        }
    }

    /// Stored tier; a record without one counts as weak.
    pub fn strength_or_weak(&self) -> PasswordStrength {
        self.strength.unwrap_or(PasswordStrength::Weak)
    }

    /// Replaces the password and overwrites the cached strength.
    pub fn set_password(&mut self, password: SecretString) {
        self.strength = Some(classify(&password));
        self.password = password;
    }

    /// Re-derives the cached strength from the current password.
    ///
    /// Returns `true` if the stored value was stale.
    pub fn refresh_strength(&mut self) -> bool {
        let fresh = Some(classify(&self.password));
        let changed = self.strength != fresh;
        self.strength = fresh;
        changed
    }

    /// Case-insensitive match of `needle` against resource name or username.
    ///
    /// `needle` must already be lowercased.
    pub(crate) fn matches_lowercase(&self, needle: &str) -> bool {
        needle.is_empty()
            || self.resource_name.to_lowercase().contains(needle)
            || self.username.to_lowercase().contains(needle)
    }

    /// Case-insensitive search over resource name and username.
    pub fn matches(&self, search: &str) -> bool {
        self.matches_lowercase(&search.to_lowercase())
    }
}

/// Orders records newest first by `created_at`.
///
/// Records with a pending timestamp were just written locally and go first.
/// The sort is stable.
pub fn sort_newest_first(records: &mut [CredentialRecord]) {
    records.sort_by_key(|r| r.created_at.map(Reverse));
}

fn empty_secret() -> SecretString {
    SecretString::from(String::new())
}

// Partially written documents may carry `null` where text is expected.
fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.unwrap_or_default())
}

fn lenient_strength<'de, D>(deserializer: D) -> Result<Option<PasswordStrength>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = serde_json::Value::deserialize(deserializer)?;
    Ok(raw.as_str().and_then(|s| s.parse().ok()))
}

// The backend stores the password in plain text, so it is written as-is.
mod secret_string {
    use secrecy::{ExposeSecret, SecretString};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &SecretString, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(value.expose_secret())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<SecretString, D::Error> {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        Ok(SecretString::from(raw.unwrap_or_default()))
    }
}

/// Field-by-field equality, password included; used to compare snapshots.
impl PartialEq for CredentialRecord {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.owner_id == other.owner_id
            && self.resource_name == other.resource_name
            && self.login_url == other.login_url
            && self.username == other.username
            && self.password.expose_secret() == other.password.expose_secret()
            && self.strength == other.strength
            && self.created_at == other.created_at
    }
}
