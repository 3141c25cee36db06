use serde::{Deserialize, Serialize};

use crate::errors::CoreError;
use super::request::StatisticsRequest;

// ── covid19api.com wire types ───────────────────────────────────────
//
// Field names follow the API's PascalCase keys. Extra keys are ignored;
// missing keys are decode errors, never defaulted.

/// One day of a country's cumulative history (`/total/dayone/country/{c}`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DailyRecord {
    pub date: String,
    pub confirmed: u64,
    pub recovered: u64,
    pub deaths: u64,
}

/// One country's "today" record inside the `/summary` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CountrySummary {
    pub date: String,
    pub total_confirmed: u64,
    pub total_recovered: u64,
    pub total_deaths: u64,
}

/// World-wide totals inside the `/summary` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GlobalTotals {
    pub total_confirmed: u64,
    pub total_recovered: u64,
    pub total_deaths: u64,
}

/// Body of `GET /summary`. Both keys must be present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SummaryResponse {
    pub global: GlobalTotals,
    pub countries: Vec<CountrySummary>,
}

/// A decoded API response, shaped by the request that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatisticsResponse {
    Summary(SummaryResponse),
    History(Vec<DailyRecord>),
}

impl StatisticsResponse {
    /// Decode a raw response body for `request`.
    ///
    /// The summary endpoint returns an object, the history endpoint a list;
    /// a body of the wrong shape or with a missing field is an error.
    pub fn parse(request: &StatisticsRequest, body: &[u8]) -> Result<Self, CoreError> {
        match request {
            StatisticsRequest::GlobalSummary => {
                Ok(StatisticsResponse::Summary(serde_json::from_slice(body)?))
            }
            StatisticsRequest::CountryHistory { .. } => {
                Ok(StatisticsResponse::History(serde_json::from_slice(body)?))
            }
        }
    }

    /// Number of records that will become chart points.
    #[must_use]
    pub fn record_count(&self) -> usize {
        match self {
            StatisticsResponse::Summary(summary) => summary.countries.len(),
            StatisticsResponse::History(records) => records.len(),
        }
    }
}
