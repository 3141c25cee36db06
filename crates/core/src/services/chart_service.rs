use crate::models::chart::{ChartDescriptor, ChartSet};
use crate::models::series::{StatisticKind, StatisticsSeries};

/// Turns extracted series into chart descriptors.
///
/// The core computes all the numbers — the frontend only renders.
/// Titles depend only on the statistic, never on the selected country.
pub struct ChartService;

impl ChartService {
    pub fn new() -> Self {
        Self
    }

    /// One line chart for `kind`.
    pub fn build_chart(&self, kind: StatisticKind, series: &StatisticsSeries) -> ChartDescriptor {
        ChartDescriptor::line(kind, series.series(kind))
    }

    /// The confirmed / recovered / deaths charts for one update.
    pub fn build_charts(&self, series: &StatisticsSeries) -> ChartSet {
        ChartSet {
            confirmed: self.build_chart(StatisticKind::Confirmed, series),
            recovered: self.build_chart(StatisticKind::Recovered, series),
            deaths: self.build_chart(StatisticKind::Deaths, series),
        }
    }
}

impl Default for ChartService {
    fn default() -> Self {
        Self::new()
    }
}
