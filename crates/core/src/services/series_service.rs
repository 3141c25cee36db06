use crate::models::response::{CountrySummary, DailyRecord, StatisticsResponse, SummaryResponse};
use crate::models::series::StatisticsSeries;

/// Reshapes decoded API responses into parallel statistic sequences.
///
/// Pure: no I/O, no filtering, no sorting. Output order is response order
/// and every sequence has exactly one element per response record.
pub struct SeriesService;

impl SeriesService {
    pub fn new() -> Self {
        Self
    }

    /// Extract the four sequences from either response shape.
    pub fn extract(&self, response: &StatisticsResponse) -> StatisticsSeries {
        match response {
            StatisticsResponse::Summary(summary) => self.from_summary(summary),
            StatisticsResponse::History(records) => self.from_history(records),
        }
    }

    /// Per-country "today" totals from `/summary`, one point per country.
    ///
    /// Note: this is NOT a world-wide time series. The x-axis carries each
    /// country's report date and the y-axis that country's running total, so
    /// the resulting "trend" line jumps between countries. The `Global`
    /// record is deliberately left out of the series.
    pub fn from_summary(&self, summary: &SummaryResponse) -> StatisticsSeries {
        tracing::debug!(
            countries = summary.countries.len(),
            "building global series from per-country totals"
        );
        let mut series = StatisticsSeries::with_capacity(summary.countries.len());
        for CountrySummary {
            date,
            total_confirmed,
            total_recovered,
            total_deaths,
        } in &summary.countries
        {
            series.push(date.clone(), *total_confirmed, *total_recovered, *total_deaths);
        }
        series
    }

    /// Day-by-day cumulative counts from `/total/dayone/country/{c}`.
    pub fn from_history(&self, records: &[DailyRecord]) -> StatisticsSeries {
        let mut series = StatisticsSeries::with_capacity(records.len());
        for record in records {
            series.push(
                record.date.clone(),
                record.confirmed,
                record.recovered,
                record.deaths,
            );
        }
        series
    }
}

impl Default for SeriesService {
    fn default() -> Self {
        Self::new()
    }
}
