use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Mailbox that receives booking requests
pub const DEFAULT_BOOKING_RECIPIENT: &str = "umuhiregermaine12@gmail.com";

/// Local storage key holding the theme token
pub const DEFAULT_THEME_STORAGE_KEY: &str = "theme";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid site configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Top-level configuration for the site
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub theme: ThemeConfig,
    pub booking: BookingConfig,
}

impl SiteConfig {
    /// Parse a (possibly partial) JSON document, filling gaps with defaults
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub storage_key: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_THEME_STORAGE_KEY.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BookingConfig {
    /// Address the mailto handoff is addressed to
    pub recipient: String,
    /// Simulated processing time between submit and the mail handoff
    pub submit_delay_ms: u64,
    /// Time the confirmation popup needs to animate out before the draft resets
    pub dismiss_delay_ms: u64,
    /// Calendar days scanned ahead of today for bookable dates
    pub lookahead_days: u32,
    /// Maximum number of bookable dates offered
    pub max_dates: usize,
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            recipient: DEFAULT_BOOKING_RECIPIENT.to_string(),
            submit_delay_ms: 1500,
            dismiss_delay_ms: 500,
            lookahead_days: 30,
            max_dates: 14,
        }
    }
}

impl BookingConfig {
    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }

    pub fn dismiss_delay(&self) -> Duration {
        Duration::from_millis(self.dismiss_delay_ms)
    }
}
