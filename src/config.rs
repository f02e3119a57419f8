//! Runtime configuration from environment variables.

use std::time::Duration;

use thiserror::Error;

use crate::view::PageSize;

pub const PAGE_SIZE_VAR: &str = "PWD_VAULT_PAGE_SIZE";
pub const METER_DEBOUNCE_VAR: &str = "PWD_VAULT_METER_DEBOUNCE_MS";

const DEFAULT_METER_DEBOUNCE_MS: u64 = 300;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewConfig {
    /// Page size the list starts with.
    pub default_page_size: PageSize,
    /// Delay before the strength meter re-evaluates after a keystroke.
    pub meter_debounce: Duration,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            default_page_size: PageSize::default(),
            meter_debounce: Duration::from_millis(DEFAULT_METER_DEBOUNCE_MS),
        }
    }
}

impl ViewConfig {
    /// Loads the configuration.
    ///
    /// Priority:
    /// 1. Environment variables `PWD_VAULT_PAGE_SIZE`, `PWD_VAULT_METER_DEBOUNCE_MS`
    /// 2. Defaults (5 per page, 300 ms)
    ///
    /// # Errors
    ///
    /// Returns error if a variable is set but does not parse, or the page
    /// size is not one of 5, 10, 20, 50.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(raw) = var(PAGE_SIZE_VAR) {
            config.default_page_size = raw
                .trim()
                .parse::<usize>()
                .ok()
                .and_then(|n| PageSize::try_from(n).ok())
                .ok_or_else(|| invalid(PAGE_SIZE_VAR, raw))?;
        }

        if let Some(raw) = var(METER_DEBOUNCE_VAR) {
            let ms = raw
                .trim()
                .parse::<u64>()
                .map_err(|_| invalid(METER_DEBOUNCE_VAR, raw))?;
            config.meter_debounce = Duration::from_millis(ms);
        }

        #[cfg(feature = "tracing")]
        tracing::info!(
            "Config loaded: page size {}, meter debounce {:?}",
            config.default_page_size.get(),
            config.meter_debounce
        );

        Ok(config)
    }
}

fn var(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

fn invalid(key: &'static str, value: String) -> ConfigError {
    #[cfg(feature = "tracing")]
    tracing::error!("Config load FAILED: {} = {:?}", key, value);
    ConfigError::Invalid { key, value }
}
