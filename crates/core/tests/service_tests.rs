// ═══════════════════════════════════════════════════════════════════
// Service Tests — SeriesService extraction, ChartService building
// ═══════════════════════════════════════════════════════════════════

use covid_dashboard_core::models::response::{
    CountrySummary, DailyRecord, GlobalTotals, StatisticsResponse, SummaryResponse,
};
use covid_dashboard_core::models::series::{StatisticKind, StatisticsSeries};
use covid_dashboard_core::services::chart_service::ChartService;
use covid_dashboard_core::services::series_service::SeriesService;

// ═══════════════════════════════════════════════════════════════════
// Test Helpers
// ═══════════════════════════════════════════════════════════════════

fn day(date: &str, confirmed: u64, recovered: u64, deaths: u64) -> DailyRecord {
    DailyRecord {
        date: date.into(),
        confirmed,
        recovered,
        deaths,
    }
}

fn country(date: &str, confirmed: u64, recovered: u64, deaths: u64) -> CountrySummary {
    CountrySummary {
        date: date.into(),
        total_confirmed: confirmed,
        total_recovered: recovered,
        total_deaths: deaths,
    }
}

fn summary(countries: Vec<CountrySummary>) -> SummaryResponse {
    SummaryResponse {
        global: GlobalTotals {
            total_confirmed: 999_999,
            total_recovered: 888_888,
            total_deaths: 77_777,
        },
        countries,
    }
}

// ═══════════════════════════════════════════════════════════════════
// SeriesService — country history
// ═══════════════════════════════════════════════════════════════════

mod history_extraction {
    use super::*;

    #[test]
    fn two_day_example() {
        let records = vec![day("2020-01-22", 1, 0, 0), day("2020-01-23", 2, 0, 0)];
        let series = SeriesService::new().from_history(&records);

        let confirmed = series.series(StatisticKind::Confirmed);
        assert_eq!(confirmed.dates, vec!["2020-01-22", "2020-01-23"]);
        assert_eq!(confirmed.values, vec![1, 2]);
    }

    #[test]
    fn maps_each_field_to_its_sequence() {
        let records = vec![
            day("2020-03-01", 10, 2, 1),
            day("2020-03-02", 15, 3, 1),
            day("2020-03-03", 21, 5, 2),
        ];
        let series = SeriesService::new().from_history(&records);
        assert_eq!(series.len(), 3);
        assert_eq!(series.confirmed, vec![10, 15, 21]);
        assert_eq!(series.recovered, vec![2, 3, 5]);
        assert_eq!(series.deaths, vec![1, 1, 2]);
    }

    #[test]
    fn preserves_response_order_without_sorting() {
        let records = vec![day("2020-03-03", 21, 5, 2), day("2020-03-01", 10, 2, 1)];
        let series = SeriesService::new().from_history(&records);
        assert_eq!(series.dates, vec!["2020-03-03", "2020-03-01"]);
        assert_eq!(series.confirmed, vec![21, 10]);
    }

    #[test]
    fn keeps_duplicate_dates() {
        let records = vec![day("2020-03-01", 1, 0, 0), day("2020-03-01", 4, 0, 0)];
        let series = SeriesService::new().from_history(&records);
        assert_eq!(series.len(), 2);
    }

    #[test]
    fn dates_are_verbatim() {
        let records = vec![day("2020-03-01T00:00:00Z", 1, 0, 0)];
        let series = SeriesService::new().from_history(&records);
        assert_eq!(series.dates, vec!["2020-03-01T00:00:00Z"]);
    }

    #[test]
    fn empty_history_gives_empty_series() {
        let series = SeriesService::new().from_history(&[]);
        assert!(series.is_empty());
        assert_eq!(series, StatisticsSeries::default());
    }
}

// ═══════════════════════════════════════════════════════════════════
// SeriesService — global summary
// ═══════════════════════════════════════════════════════════════════

mod summary_extraction {
    use super::*;

    #[test]
    fn one_point_per_country() {
        let data = summary(vec![
            country("2020-05-01T00:00:00Z", 100, 50, 3),
            country("2020-05-01T00:00:00Z", 200, 60, 6),
            country("2020-05-01T00:00:00Z", 300, 70, 9),
        ]);
        let series = SeriesService::new().from_summary(&data);
        assert_eq!(series.len(), data.countries.len());
    }

    #[test]
    fn uses_country_totals_in_order() {
        let data = summary(vec![
            country("2020-05-01T00:00:00Z", 100, 50, 3),
            country("2020-05-02T00:00:00Z", 200, 60, 6),
        ]);
        let series = SeriesService::new().from_summary(&data);
        assert_eq!(series.dates, vec!["2020-05-01T00:00:00Z", "2020-05-02T00:00:00Z"]);
        assert_eq!(series.confirmed, vec![100, 200]);
        assert_eq!(series.recovered, vec![50, 60]);
        assert_eq!(series.deaths, vec![3, 6]);
    }

    #[test]
    fn global_totals_are_not_plotted() {
        let data = summary(vec![country("2020-05-01", 100, 50, 3)]);
        let series = SeriesService::new().from_summary(&data);
        assert!(!series.confirmed.contains(&data.global.total_confirmed));
        assert!(!series.recovered.contains(&data.global.total_recovered));
        assert!(!series.deaths.contains(&data.global.total_deaths));
    }

    #[test]
    fn no_countries_gives_empty_series() {
        let series = SeriesService::new().from_summary(&summary(vec![]));
        assert!(series.is_empty());
    }
}

// ═══════════════════════════════════════════════════════════════════
// SeriesService — dispatch
// ═══════════════════════════════════════════════════════════════════

mod extract_dispatch {
    use super::*;

    #[test]
    fn history_response() {
        let service = SeriesService::default();
        let records = vec![day("2020-01-22", 1, 0, 0)];
        let response = StatisticsResponse::History(records.clone());
        assert_eq!(service.extract(&response), service.from_history(&records));
    }

    #[test]
    fn summary_response() {
        let service = SeriesService::default();
        let data = summary(vec![country("2020-05-01", 100, 50, 3)]);
        let response = StatisticsResponse::Summary(data.clone());
        assert_eq!(service.extract(&response), service.from_summary(&data));
    }
}

// ═══════════════════════════════════════════════════════════════════
// ChartService
// ═══════════════════════════════════════════════════════════════════

mod chart_building {
    use super::*;

    fn sample_series() -> StatisticsSeries {
        SeriesService::new().from_history(&[
            day("2020-01-22", 1, 0, 0),
            day("2020-01-23", 2, 1, 0),
            day("2020-01-24", 5, 1, 1),
        ])
    }

    #[test]
    fn builds_three_charts_with_fixed_titles() {
        let charts = ChartService::new().build_charts(&sample_series());
        assert_eq!(charts.confirmed.title(), "Confirmed Cases");
        assert_eq!(charts.recovered.title(), "Recovered Cases");
        assert_eq!(charts.deaths.title(), "Deaths");
    }

    #[test]
    fn each_chart_plots_its_statistic() {
        let series = sample_series();
        let charts = ChartService::new().build_charts(&series);
        for kind in StatisticKind::ALL {
            let trace = charts.get(kind).trace().unwrap();
            assert_eq!(trace.x, series.dates);
            assert_eq!(trace.y, series.values(kind));
            assert_eq!(trace.name, kind.title());
        }
    }

    #[test]
    fn all_charts_share_axis_titles() {
        let charts = ChartService::new().build_charts(&sample_series());
        for chart in charts.as_array() {
            assert_eq!(chart.layout.xaxis.title, "Date");
            assert_eq!(chart.layout.yaxis.title, "Cases");
        }
    }

    #[test]
    fn single_chart() {
        let chart = ChartService::default().build_chart(StatisticKind::Deaths, &sample_series());
        assert_eq!(chart.title(), "Deaths");
        assert_eq!(chart.trace().unwrap().y, vec![0, 0, 1]);
    }

    #[test]
    fn empty_series_gives_empty_charts() {
        let charts = ChartService::new().build_charts(&StatisticsSeries::default());
        for chart in charts.as_array() {
            assert!(chart.trace().unwrap().x.is_empty());
            assert!(chart.trace().unwrap().y.is_empty());
        }
    }
}
