pub mod errors;
pub mod models;
pub mod providers;
pub mod services;

use models::{
    chart::ChartSet,
    country::CountryOption,
    request::StatisticsRequest,
    series::StatisticsSeries,
    settings::DashboardSettings,
};
use providers::{covid19api::Covid19ApiProvider, traits::StatisticsProvider};
use services::{chart_service::ChartService, series_service::SeriesService};

use errors::CoreError;

/// Main entry point for the COVID-19 dashboard core library.
///
/// Holds the injected settings and data provider. Nothing else is kept
/// between calls: every update fetches and rebuilds from scratch.
#[must_use]
pub struct CovidDashboard {
    settings: DashboardSettings,
    provider: Box<dyn StatisticsProvider>,
    series_service: SeriesService,
    chart_service: ChartService,
}

impl std::fmt::Debug for CovidDashboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CovidDashboard")
            .field("provider", &self.provider.name())
            .field("api_base_url", &self.settings.api_base_url)
            .field("country_options", &self.settings.country_options.len())
            .finish()
    }
}

impl CovidDashboard {
    /// Create a dashboard that talks to covid19api.com over HTTP.
    pub fn new(settings: DashboardSettings) -> Result<Self, CoreError> {
        settings.validate()?;
        let provider = Covid19ApiProvider::from_settings(&settings);
        Ok(Self::build(settings, Box::new(provider)))
    }

    /// Create a dashboard backed by a custom provider.
    pub fn with_provider(
        settings: DashboardSettings,
        provider: Box<dyn StatisticsProvider>,
    ) -> Result<Self, CoreError> {
        settings.validate()?;
        Ok(Self::build(settings, provider))
    }

    fn build(settings: DashboardSettings, provider: Box<dyn StatisticsProvider>) -> Self {
        Self {
            settings,
            provider,
            series_service: SeriesService::new(),
            chart_service: ChartService::new(),
        }
    }

    // ── Configuration ───────────────────────────────────────────────

    #[must_use]
    pub fn settings(&self) -> &DashboardSettings {
        &self.settings
    }

    /// Options for the country selector, in configured order.
    #[must_use]
    pub fn country_options(&self) -> &[CountryOption] {
        &self.settings.country_options
    }

    /// Identifier selected on first load.
    #[must_use]
    pub fn default_country(&self) -> &str {
        &self.settings.default_country
    }

    /// Name of the active data provider.
    #[must_use]
    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    // ── Query & Transform ───────────────────────────────────────────

    /// The request an update for `identifier` will issue.
    ///
    /// The identifier is not checked against the option list.
    pub fn request_for(&self, identifier: &str) -> StatisticsRequest {
        StatisticsRequest::for_identifier(identifier)
    }

    /// Fetch once and extract the date / confirmed / recovered / deaths series.
    pub async fn fetch_series(&self, identifier: &str) -> Result<StatisticsSeries, CoreError> {
        let request = self.request_for(identifier);
        let response = self.provider.fetch(&request).await?;
        let series = self.series_service.extract(&response);
        tracing::debug!(
            provider = self.provider.name(),
            points = series.len(),
            "series ready for {identifier}"
        );
        Ok(series)
    }

    /// Fetch once and build the confirmed, recovered and deaths charts.
    ///
    /// Any failure aborts the whole update; no partial or placeholder charts
    /// are returned.
    pub async fn update_charts(&self, identifier: &str) -> Result<ChartSet, CoreError> {
        let series = self.fetch_series(identifier).await?;
        Ok(self.chart_service.build_charts(&series))
    }

    /// `update_charts` for the configured default country.
    pub async fn default_charts(&self) -> Result<ChartSet, CoreError> {
        self.update_charts(&self.settings.default_country).await
    }
}
