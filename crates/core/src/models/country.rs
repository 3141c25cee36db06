use serde::{Deserialize, Serialize};

/// Identifier of the aggregate "whole world" selection.
///
/// Compared exactly (case-sensitive). Every other identifier is treated as a
/// country name and sent to the API untouched.
pub const GLOBAL_IDENTIFIER: &str = "global";

/// One entry of the country selector shown by the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryOption {
    /// Text shown to the user (e.g., "Global", "USA")
    pub label: String,

    /// Identifier passed to the query (e.g., "global", "USA")
    pub value: String,
}

impl CountryOption {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }

    /// Whether this option selects the aggregate summary endpoint.
    #[must_use]
    pub fn is_global(&self) -> bool {
        self.value == GLOBAL_IDENTIFIER
    }
}

/// The built-in option list: Global, USA, India.
pub fn default_country_options() -> Vec<CountryOption> {
    vec![
        CountryOption::new("Global", GLOBAL_IDENTIFIER),
        CountryOption::new("USA", "USA"),
        CountryOption::new("India", "India"),
    ]
}
