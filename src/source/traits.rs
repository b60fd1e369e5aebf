use async_trait::async_trait;
use bytes::Bytes;

use crate::error::Result;

/// Outcome of one art fetch. Timeouts and missing assets are expected control
/// flow ("retry next run" / "nothing to mirror"), not errors.
#[derive(Debug, Clone)]
pub enum ArtFetch {
    Image(Bytes),
    NotFound,
    TimedOut,
}

#[async_trait]
pub trait ArtSource: Send + Sync {
    /// Fetch the image for one variant. `Err` means an unexpected error
    /// response that should fail this unit of work loudly.
    async fn fetch_art(&self, id: u32, evolved: bool, censored: bool) -> Result<ArtFetch>;
}
