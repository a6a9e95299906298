//! Panel configuration.

/// Fallback backend URL when the hosting environment supplies none.
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:8000";

/// Runtime configuration for the panel.
///
/// Held in memory for the lifetime of the panel; edits apply to the next
/// queued command. The hosting application decides whether to persist it.
#[derive(Debug, Clone)]
pub struct PanelConfig {
    /// Base URL of the backend API.
    pub server_url: String,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            server_url: default_server_url(),
        }
    }
}

/// Resolve the startup server URL from the hosting environment.
pub fn default_server_url() -> String {
    std::env::var("DATADESK_SERVER_URL").unwrap_or_else(|_| DEFAULT_SERVER_URL.to_string())
}
