use async_trait::async_trait;
use reqwest::Client;
#[cfg(not(target_arch = "wasm32"))]
use std::time::Duration;

use crate::errors::CoreError;
use crate::models::request::StatisticsRequest;
use crate::models::response::StatisticsResponse;
use crate::models::settings::{DashboardSettings, DEFAULT_API_BASE_URL};
use super::traits::StatisticsProvider;

const PROVIDER_NAME: &str = "covid19api";

/// covid19api.com provider for COVID-19 case statistics.
///
/// - **Free**: No API key.
/// - **Endpoints**: `/summary`, `/total/dayone/country/{country}`
///
/// One GET per `fetch`. No retries and no caching: every dashboard update
/// hits the API again.
pub struct Covid19ApiProvider {
    client: Client,
    base_url: String,
}

impl Covid19ApiProvider {
    /// Provider against the public API with no timeout override.
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_API_BASE_URL, None)
    }

    /// Provider against `base_url`. `timeout_secs` is ignored on wasm32,
    /// where the browser owns request lifetimes.
    pub fn with_base_url(base_url: impl Into<String>, timeout_secs: Option<u64>) -> Self {
        let builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = match timeout_secs {
            Some(secs) => builder.timeout(Duration::from_secs(secs)),
            None => builder,
        };
        #[cfg(target_arch = "wasm32")]
        let _ = timeout_secs;
        Self {
            client: builder.build().unwrap_or_else(|_| Client::new()),
            base_url: base_url.into(),
        }
    }

    pub fn from_settings(settings: &DashboardSettings) -> Self {
        Self::with_base_url(settings.api_base_url.clone(), settings.request_timeout_secs)
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Default for Covid19ApiProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl StatisticsProvider for Covid19ApiProvider {
    fn name(&self) -> &str {
        PROVIDER_NAME
    }

    async fn fetch(&self, request: &StatisticsRequest) -> Result<StatisticsResponse, CoreError> {
        let url = request.url(&self.base_url);
        tracing::info!(%url, "fetching {request}");

        let resp = self.client.get(&url).send().await?;

        let status = resp.status();
        tracing::debug!(%status, "response received");
        if !status.is_success() {
            return Err(CoreError::Api {
                provider: PROVIDER_NAME.into(),
                message: format!("HTTP {status} for {}", request.path()),
            });
        }

        let body = resp.bytes().await?;
        let response = StatisticsResponse::parse(request, &body).map_err(|e| {
            tracing::warn!(error = %e, "failed to decode {request}");
            e
        })?;

        tracing::debug!(records = response.record_count(), "decoded {request}");
        Ok(response)
    }
}
