use async_trait::async_trait;

use crate::errors::CoreError;
use crate::models::request::StatisticsRequest;
use crate::models::response::StatisticsResponse;

/// Trait abstraction for statistics data sources.
///
/// The dashboard only knows this trait; the HTTP client for covid19api.com
/// is one implementation, tests inject canned ones.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait StatisticsProvider: Send + Sync {
    /// Human-readable name of this provider (for logs/errors).
    fn name(&self) -> &str;

    /// Execute `request` once and decode the response.
    ///
    /// Implementations must not retry or substitute data: any transport,
    /// status or decode failure is returned as an error.
    async fn fetch(&self, request: &StatisticsRequest) -> Result<StatisticsResponse, CoreError>;
}
