use serde::{Deserialize, Serialize};

use super::series::{Series, StatisticKind};

/// Title of the horizontal axis on every chart.
pub const X_AXIS_TITLE: &str = "Date";

/// Title of the vertical axis on every chart.
pub const Y_AXIS_TITLE: &str = "Cases";

/// How a trace's points are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TraceMode {
    Lines,
    Markers,
}

/// One plotted line: dates on x, counts on y.
///
/// The core generates these — the frontend just renders them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineTrace {
    /// Always "scatter"; the mode decides lines vs. markers.
    #[serde(rename = "type")]
    pub trace_type: String,

    pub x: Vec<String>,

    pub y: Vec<u64>,

    pub mode: TraceMode,

    /// Legend name, same as the chart title
    pub name: String,
}

impl LineTrace {
    pub fn from_series(series: Series, name: impl Into<String>) -> Self {
        Self {
            trace_type: "scatter".to_string(),
            x: series.dates,
            y: series.values,
            mode: TraceMode::Lines,
            name: name.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Axis {
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartLayout {
    pub title: String,
    pub xaxis: Axis,
    pub yaxis: Axis,
}

/// Data plus axis/title metadata for one chart placeholder.
///
/// Serializes to the `{ "data": [...], "layout": {...} }` figure shape
/// that plotting front-ends accept directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartDescriptor {
    pub data: Vec<LineTrace>,
    pub layout: ChartLayout,
}

impl ChartDescriptor {
    /// A single-line chart titled after `kind`, with the standard axes.
    pub fn line(kind: StatisticKind, series: Series) -> Self {
        let title = kind.title();
        Self {
            data: vec![LineTrace::from_series(series, title)],
            layout: ChartLayout {
                title: title.to_string(),
                xaxis: Axis {
                    title: X_AXIS_TITLE.to_string(),
                },
                yaxis: Axis {
                    title: Y_AXIS_TITLE.to_string(),
                },
            },
        }
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.layout.title
    }

    /// The first (and for dashboard charts, only) trace.
    #[must_use]
    pub fn trace(&self) -> Option<&LineTrace> {
        self.data.first()
    }
}

/// The three charts produced by one dashboard update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartSet {
    pub confirmed: ChartDescriptor,
    pub recovered: ChartDescriptor,
    pub deaths: ChartDescriptor,
}

impl ChartSet {
    #[must_use]
    pub fn get(&self, kind: StatisticKind) -> &ChartDescriptor {
        match kind {
            StatisticKind::Confirmed => &self.confirmed,
            StatisticKind::Recovered => &self.recovered,
            StatisticKind::Deaths => &self.deaths,
        }
    }

    /// Charts in display order: confirmed, recovered, deaths.
    #[must_use]
    pub fn as_array(&self) -> [&ChartDescriptor; 3] {
        [&self.confirmed, &self.recovered, &self.deaths]
    }
}
