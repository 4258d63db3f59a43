//! The calendar feed endpoint.

use axum::{
    Router,
    extract::{Query, State},
    http::header::CONTENT_TYPE,
    response::{IntoResponse, Response},
    routing::get,
};
use chrono::Utc;
use serde::Deserialize;

use sotacal_core::build_calendar;

use crate::routes::AppError;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/alerts.ics", get(alerts_feed))
        .route("/healthz", get(healthz))
}

#[derive(Deserialize)]
pub struct FeedQuery {
    /// `json` switches to the raw passthrough mode.
    pub format: Option<String>,
}

/// GET /alerts.ics - The alert feed, as ICS or (with ?format=json) as a
/// pretty-printed dump of the raw upstream records.
async fn alerts_feed(
    State(state): State<AppState>,
    Query(query): Query<FeedQuery>,
) -> Result<Response, AppError> {
    let alerts = state.alerts().await?;

    if query.format.as_deref() == Some("json") {
        let body = serde_json::to_string_pretty(alerts.as_slice())?;
        return Ok(([(CONTENT_TYPE, "application/json")], body).into_response());
    }

    let ics = build_calendar(&alerts, Utc::now());
    Ok(([(CONTENT_TYPE, "text/calendar; charset=utf-8")], ics).into_response())
}

/// GET /healthz - Liveness probe
async fn healthz() -> &'static str {
    "ok"
}
