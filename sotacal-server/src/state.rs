use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use anyhow::Result;
use sotacal_core::{Alert, SotaCalResult};

use crate::upstream;

/// How long a fetched alert list may be served before refetching.
const CACHE_TTL: Duration = Duration::from_secs(300);

/// Shared application state: the upstream client plus a short-lived cache
/// shielding the alerts API from repeated requests.
#[derive(Clone)]
pub struct AppState {
    client: reqwest::Client,
    alerts_url: String,
    cache: Arc<Mutex<Option<CachedFeed>>>,
}

struct CachedFeed {
    fetched_at: Instant,
    alerts: Arc<Vec<Alert>>,
}

impl AppState {
    pub fn new(alerts_url: String) -> Result<Self> {
        Ok(AppState {
            client: reqwest::Client::builder().build()?,
            alerts_url,
            cache: Arc::new(Mutex::new(None)),
        })
    }

    /// The current alert list, served from cache when fresh enough.
    pub async fn alerts(&self) -> SotaCalResult<Arc<Vec<Alert>>> {
        {
            let cache = self.cache.lock().unwrap_or_else(|e| e.into_inner());
            if let Some(cached) = cache.as_ref() {
                if is_fresh(cached.fetched_at, Instant::now()) {
                    return Ok(Arc::clone(&cached.alerts));
                }
            }
        }

        let alerts = Arc::new(upstream::fetch_alerts(&self.client, &self.alerts_url).await?);
        tracing::info!(count = alerts.len(), "refreshed alert cache");

        let mut cache = self.cache.lock().unwrap_or_else(|e| e.into_inner());
        *cache = Some(CachedFeed {
            fetched_at: Instant::now(),
            alerts: Arc::clone(&alerts),
        });
        Ok(alerts)
    }
}

fn is_fresh(fetched_at: Instant, now: Instant) -> bool {
    now.duration_since(fetched_at) < CACHE_TTL
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_freshness_window() {
        let fetched_at = Instant::now();
        assert!(is_fresh(fetched_at, fetched_at + Duration::from_secs(299)));
        assert!(!is_fresh(fetched_at, fetched_at + Duration::from_secs(300)));
    }
}
