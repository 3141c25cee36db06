use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::errors::CoreError;
use super::country::{default_country_options, CountryOption};

/// Public covid19api.com endpoint used when no base URL is configured.
pub const DEFAULT_API_BASE_URL: &str = "https://api.covid19api.com";

/// Page colors handed to the host for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub background: String,
    pub text: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: "#f4f4f4".to_string(),
            text: "#333333".to_string(),
        }
    }
}

/// Everything the dashboard needs, injected at construction time.
///
/// Every field has a default, so a TOML file only needs the keys it changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardSettings {
    /// Base URL of the statistics API, without a trailing path.
    pub api_base_url: String,

    /// Page heading.
    pub title: String,

    /// Identifier selected when the page first loads.
    pub default_country: String,

    /// Options offered in the country selector.
    pub country_options: Vec<CountryOption>,

    /// Per-request timeout. `None` leaves the HTTP client's behavior alone.
    pub request_timeout_secs: Option<u64>,

    pub theme: Theme,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            title: "COVID-19 Dashboard".to_string(),
            default_country: "global".to_string(),
            country_options: default_country_options(),
            request_timeout_secs: None,
            theme: Theme::default(),
        }
    }
}

impl DashboardSettings {
    /// Parse settings from TOML text. Missing keys take their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self, CoreError> {
        let settings: Self = toml::from_str(text)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Read and parse a TOML settings file.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, CoreError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Check the settings are usable.
    ///
    /// The selected country itself is never checked against the option list
    /// at query time; only the configured default must be one of the options.
    pub fn validate(&self) -> Result<(), CoreError> {
        let base = self.api_base_url.trim();
        if base.is_empty() {
            return Err(CoreError::Config("api_base_url must not be empty".into()));
        }
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err(CoreError::Config(format!(
                "api_base_url '{base}' must start with http:// or https://"
            )));
        }
        if self.country_options.is_empty() {
            return Err(CoreError::Config(
                "country_options must contain at least one entry".into(),
            ));
        }
        if let Some(option) = self.country_options.iter().find(|o| o.value.is_empty()) {
            return Err(CoreError::Config(format!(
                "country option '{}' has an empty value",
                option.label
            )));
        }
        if !self
            .country_options
            .iter()
            .any(|o| o.value == self.default_country)
        {
            return Err(CoreError::Config(format!(
                "default_country '{}' is not one of the country options",
                self.default_country
            )));
        }
        if self.request_timeout_secs == Some(0) {
            return Err(CoreError::Config(
                "request_timeout_secs must be greater than zero".into(),
            ));
        }
        Ok(())
    }

    /// Look up the display label for an identifier, if it is a configured option.
    #[must_use]
    pub fn label_for(&self, identifier: &str) -> Option<&str> {
        self.country_options
            .iter()
            .find(|o| o.value == identifier)
            .map(|o| o.label.as_str())
    }
}
