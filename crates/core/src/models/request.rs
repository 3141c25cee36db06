use std::fmt;

use super::country::GLOBAL_IDENTIFIER;

/// Which endpoint a dashboard update talks to.
///
/// Chosen once per invocation from the selected identifier:
/// `"global"` maps to the summary endpoint, anything else is a per-country
/// day-by-day history. The country name is NOT validated or URL-encoded;
/// an unknown name surfaces as an API-side error or an empty list.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum StatisticsRequest {
    /// `GET /summary` — global totals plus one "today" record per country.
    GlobalSummary,
    /// `GET /total/dayone/country/{country}` — daily records since day one.
    CountryHistory { country: String },
}

impl StatisticsRequest {
    pub fn for_identifier(identifier: &str) -> Self {
        if identifier == GLOBAL_IDENTIFIER {
            StatisticsRequest::GlobalSummary
        } else {
            StatisticsRequest::CountryHistory {
                country: identifier.to_string(),
            }
        }
    }

    /// Endpoint path relative to the API base URL.
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            StatisticsRequest::GlobalSummary => "/summary".to_string(),
            StatisticsRequest::CountryHistory { country } => {
                format!("/total/dayone/country/{country}")
            }
        }
    }

    /// Full URL against `base_url`. A trailing slash on the base is ignored.
    #[must_use]
    pub fn url(&self, base_url: &str) -> String {
        format!("{}{}", base_url.trim_end_matches('/'), self.path())
    }

    #[must_use]
    pub fn is_global(&self) -> bool {
        matches!(self, StatisticsRequest::GlobalSummary)
    }
}

impl fmt::Display for StatisticsRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatisticsRequest::GlobalSummary => write!(f, "global summary"),
            StatisticsRequest::CountryHistory { country } => {
                write!(f, "history for {country}")
            }
        }
    }
}
