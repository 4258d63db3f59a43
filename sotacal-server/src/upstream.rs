//! Upstream alerts API client.

use sotacal_core::{Alert, SotaCalError, SotaCalResult};

pub const DEFAULT_ALERTS_URL: &str = "https://api2.sota.org.uk/api/alerts";

/// Fetch and deserialize the current alert list.
pub async fn fetch_alerts(client: &reqwest::Client, url: &str) -> SotaCalResult<Vec<Alert>> {
    let response = client
        .get(url)
        .send()
        .await
        .and_then(reqwest::Response::error_for_status)
        .map_err(|e| SotaCalError::Upstream(e.to_string()))?;

    response
        .json::<Vec<Alert>>()
        .await
        .map_err(|e| SotaCalError::Upstream(format!("decoding alerts: {e}")))
}
