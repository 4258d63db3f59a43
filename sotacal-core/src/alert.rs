//! Upstream alert records.
//!
//! These mirror the JSON shape of the SOTA alerts API. The core treats them
//! as read-only input for one build invocation; `Serialize` is kept so the
//! server's raw JSON passthrough mode can re-emit them verbatim.

use serde::{Deserialize, Serialize};

/// One upstream-published notice of a planned summit activation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    pub id: u64,
    pub poster_user_id: u64,
    /// When the record was last updated upstream (ISO 8601, UTC).
    pub last_modified: String,
    /// Nominal start of the activation (ISO 8601, UTC).
    pub activation_time: String,
    /// Association code, e.g. "W7O".
    pub region_code: String,
    /// Summit code within the association, e.g. "CN-001".
    pub location_code: String,
    /// Planned frequencies/modes, free text.
    pub frequency_info: Option<String>,
    /// Free text; may carry `S+N` / `S-N` window hints.
    pub notes: Option<String>,
    pub activator_callsign: String,
    pub activator_display_name: Option<String>,
    pub poster_callsign: Option<String>,
}
