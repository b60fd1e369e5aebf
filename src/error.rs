use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    /// Catalog or censored-id fetch failed; fatal, aborts the run.
    #[error("catalog fetch failed: {0}")]
    Fetch(String),

    /// An art fetch returned an unexpected (non-timeout, non-404) error response.
    #[error("failed to download image for card '{id}' | evolved: {evolved} | censored: {censored} | HTTP {status}")]
    Download {
        id: u32,
        evolved: bool,
        censored: bool,
        status: u16,
    },

    /// Strict-mode limiter found no free slot in the current window.
    #[error("rate limit exceeded: {0}")]
    RateLimitExceeded(String),

    /// One local sidecar failed to parse during the scan.
    #[error("sidecar data for '{}' is invalid: {reason}", path.display())]
    SidecarParse { path: PathBuf, reason: String },

    #[error("image encode failed: {0}")]
    Encode(#[from] image::ImageError),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("blocking task failed: {0}")]
    Task(String),
}

pub type Result<T> = std::result::Result<T, SyncError>;
