use serde::{Deserialize, Serialize};

/// The three statistics the dashboard plots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatisticKind {
    Confirmed,
    Recovered,
    Deaths,
}

impl StatisticKind {
    /// All kinds in display order.
    pub const ALL: [StatisticKind; 3] = [
        StatisticKind::Confirmed,
        StatisticKind::Recovered,
        StatisticKind::Deaths,
    ];

    /// Chart and trace title. Fixed per kind, independent of the country.
    #[must_use]
    pub fn title(&self) -> &'static str {
        match self {
            StatisticKind::Confirmed => "Confirmed Cases",
            StatisticKind::Recovered => "Recovered Cases",
            StatisticKind::Deaths => "Deaths",
        }
    }
}

impl std::fmt::Display for StatisticKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.title())
    }
}

/// An ordered sequence of (date, value) pairs, stored as two parallel vectors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Series {
    pub dates: Vec<String>,
    pub values: Vec<u64>,
}

impl Series {
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate `(date, value)` pairs in order.
    pub fn points(&self) -> impl Iterator<Item = (&str, u64)> + '_ {
        self.dates
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().copied())
    }
}

/// Four parallel sequences extracted from one API response.
///
/// One element per response record, in response order. All four vectors
/// always have the same length.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatisticsSeries {
    pub dates: Vec<String>,
    pub confirmed: Vec<u64>,
    pub recovered: Vec<u64>,
    pub deaths: Vec<u64>,
}

impl StatisticsSeries {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            dates: Vec::with_capacity(capacity),
            confirmed: Vec::with_capacity(capacity),
            recovered: Vec::with_capacity(capacity),
            deaths: Vec::with_capacity(capacity),
        }
    }

    /// Append one reporting row to all four sequences.
    pub fn push(&mut self, date: String, confirmed: u64, recovered: u64, deaths: u64) {
        self.dates.push(date);
        self.confirmed.push(confirmed);
        self.recovered.push(recovered);
        self.deaths.push(deaths);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Values for one statistic, without dates.
    #[must_use]
    pub fn values(&self, kind: StatisticKind) -> &[u64] {
        match kind {
            StatisticKind::Confirmed => &self.confirmed,
            StatisticKind::Recovered => &self.recovered,
            StatisticKind::Deaths => &self.deaths,
        }
    }

    /// Date-aligned series for one statistic.
    #[must_use]
    pub fn series(&self, kind: StatisticKind) -> Series {
        Series {
            dates: self.dates.clone(),
            values: self.values(kind).to_vec(),
        }
    }
}
