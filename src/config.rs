use serde::Deserialize;

/// Root of the remote service; all API and asset URLs hang off this.
pub const SVGDB_URL: &str = "https://svgdb.me/";

/// User-Agent sent with every request.
pub const USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64; rv:143.0) Gecko/20100101 Firefox/143.0";

/// Connect timeout for art fetches, in seconds. Catalog calls carry no timeout.
pub const ART_CONNECT_TIMEOUT_SECS: u64 = 30;

/// Extension appended to an image filename to form its sidecar filename.
pub const SIDECAR_EXTENSION: &str = "json";

/// Top-level configuration for one mirror run.
#[derive(Debug, Clone, Deserialize)]
pub struct SyncConfig {
    /// Directory images and sidecars are written to.
    pub output_dir: String,
    /// Remote service root; overridable for tests.
    pub base_url: String,
    /// Moving-window rate limit shared by every remote call.
    pub calls_per_second: usize,
    /// Size of the blocking pool for file writes and image encoding.
    pub io_workers: usize,
}

impl SyncConfig {
    pub fn new(output_dir: impl Into<String>) -> Self {
        Self {
            output_dir: output_dir.into(),
            ..Self::default()
        }
    }

    /// Base URL of the JSON API (catalog + censored ids).
    pub fn api_url(&self) -> String {
        format!("{}api/", self.base_url)
    }

    /// Base URL for full-art images.
    pub fn fullart_url(&self) -> String {
        format!("{}assets/fullart/", self.base_url)
    }

    /// Base URL for censored-art images.
    pub fn censored_art_url(&self) -> String {
        format!("{}assets/censored/", self.base_url)
    }
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            output_dir: String::new(),
            base_url: SVGDB_URL.to_string(),
            calls_per_second: 10,
            io_workers: 4,
        }
    }
}
