//! Static service info reported at the root route.

use serde::Serialize;

/// Read-only status record returned by `GET /`.
///
/// Built once at startup and shared for the process lifetime; `app_mode`
/// serializes as `appMode` and is `null` when the mode is unset.
#[derive(Debug, Clone, Serialize)]
pub struct Info {
    pub status: String,
    pub version: String,
    #[serde(rename = "appMode")]
    pub app_mode: Option<String>,
}

impl Info {
    /// Create the info record for this service build.
    pub fn new(status: impl Into<String>, version: impl Into<String>, app_mode: Option<String>) -> Self {
        Self {
            status: status.into(),
            version: version.into(),
            app_mode,
        }
    }
}
