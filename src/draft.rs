//! Create and edit forms for credential records.

use chrono::{DateTime, Utc};
use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

use crate::record::CredentialRecord;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DraftError {
    #[error("Please fill in all required fields: {0} is empty")]
    MissingField(&'static str),
    #[error("Passwords do not match")]
    PasswordMismatch,
}

/// Contents of the "add password" form.
#[derive(Debug, Clone)]
pub struct CredentialDraft {
    pub resource_name: String,
    pub login_url: String,
    pub username: String,
    pub password: SecretString,
    pub confirm_password: SecretString,
}

impl CredentialDraft {
    /// Checks required fields in form order, then the confirmation.
    pub fn validate(&self) -> Result<(), DraftError> {
        require("resourceName", &self.resource_name)?;
        require("loginUrl", &self.login_url)?;
        require("username", &self.username)?;
        require("password", self.password.expose_secret())?;

        if self.password.expose_secret() != self.confirm_password.expose_secret() {
            return Err(DraftError::PasswordMismatch);
        }
        Ok(())
    }

    /// Validates the draft and turns it into a classified record.
    ///
    /// `id` and `created_at` come from the persistence layer.
    pub fn into_record(
        self,
        id: impl Into<String>,
        owner_id: impl Into<String>,
        created_at: Option<DateTime<Utc>>,
    ) -> Result<CredentialRecord, DraftError> {
        self.validate()?;
        Ok(CredentialRecord::new(
            id,
            owner_id,
            self.resource_name,
            self.login_url,
            self.username,
            self.password,
            created_at,
        ))
    }
}

/// Partial edit merged over an existing record.
#[derive(Debug, Clone, Default)]
pub struct CredentialUpdate {
    pub resource_name: Option<String>,
    pub login_url: Option<String>,
    pub username: Option<String>,
    pub password: Option<SecretString>,
}

impl CredentialUpdate {
    pub fn validate(&self) -> Result<(), DraftError> {
        if let Some(ref v) = self.resource_name {
            require("resourceName", v)?;
        }
        if let Some(ref v) = self.login_url {
            require("loginUrl", v)?;
        }
        if let Some(ref v) = self.username {
            require("username", v)?;
        }
        if let Some(ref v) = self.password {
            require("password", v.expose_secret())?;
        }
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.resource_name.is_none()
            && self.login_url.is_none()
            && self.username.is_none()
            && self.password.is_none()
    }
}

impl CredentialRecord {
    /// Merges `update` into the record. A new password re-classifies it.
    ///
    /// Nothing is applied if any edited field is empty.
    pub fn apply_update(&mut self, update: CredentialUpdate) -> Result<(), DraftError> {
        update.validate()?;

        if let Some(v) = update.resource_name {
            self.resource_name = v;
        }
        if let Some(v) = update.login_url {
            self.login_url = v;
        }
        if let Some(v) = update.username {
            self.username = v;
        }
        if let Some(v) = update.password {
            self.set_password(v);
        }
        Ok(())
    }
}

fn require(field: &'static str, value: &str) -> Result<(), DraftError> {
    if value.is_empty() {
        return Err(DraftError::MissingField(field));
    }
    Ok(())
}
