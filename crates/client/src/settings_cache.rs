//! Company settings caching using Moka.
//!
//! Settings change rarely but are read by every document form for the
//! default VAT rate, so they are fetched once and kept for a TTL.

use std::sync::Arc;
use std::time::Duration;

use bizdocs_core::settings::CompanySettings;
use moka::future::Cache;
use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::client::BackendClient;
use crate::error::ClientError;

/// Cached view of the backend's company settings.
#[derive(Clone)]
pub struct SettingsCache {
    client: BackendClient,
    cache: Cache<(), Arc<CompanySettings>>,
}

impl SettingsCache {
    /// Creates a cache whose entry expires `ttl_secs` after it is fetched.
    #[must_use]
    pub fn new(client: BackendClient, ttl_secs: u64) -> Self {
        let cache = Cache::builder()
            .max_capacity(1)
            .time_to_live(Duration::from_secs(ttl_secs))
            .build();

        Self { client, cache }
    }

    /// Returns the settings, fetching them on a miss.
    pub async fn current(&self) -> Result<Arc<CompanySettings>, ClientError> {
        if let Some(cached) = self.cache.get(&()).await {
            return Ok(cached);
        }

        debug!("Company settings not cached, fetching");
        let settings = Arc::new(self.client.fetch_settings().await?);
        self.cache.insert((), Arc::clone(&settings)).await;
        Ok(settings)
    }

    /// Drops the cached settings and fetches them again.
    pub async fn refresh(&self) -> Result<Arc<CompanySettings>, ClientError> {
        self.cache.invalidate(&()).await;
        self.current().await
    }

    /// VAT rate for new documents.
    ///
    /// Falls back to `fallback` when the backend is unreachable or the
    /// settings carry no rate.
    pub async fn vat_rate(&self, fallback: Decimal) -> Decimal {
        match self.current().await {
            Ok(settings) => settings.vat_rate_or(fallback),
            Err(e) => {
                warn!(error = %e, %fallback, "Company settings unavailable, using default VAT rate");
                fallback
            }
        }
    }
}
