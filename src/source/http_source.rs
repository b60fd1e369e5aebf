use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::{debug, warn};

use super::traits::{ArtFetch, ArtSource};
use crate::config::{ART_CONNECT_TIMEOUT_SECS, USER_AGENT};
use crate::error::{Result, SyncError};
use crate::limit::RateLimiter;

/// Fetches card art over HTTP. Every request acquires a permit from the shared
/// limiter first; a connect timeout is applied to art fetches only.
pub struct HttpArtSource {
    client: Client,
    fullart_url: String,
    censored_art_url: String,
    limiter: Arc<RateLimiter>,
}

impl HttpArtSource {
    pub fn new(
        fullart_url: String,
        censored_art_url: String,
        limiter: Arc<RateLimiter>,
    ) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .connect_timeout(Duration::from_secs(ART_CONNECT_TIMEOUT_SECS))
            .build()?;
        Ok(Self {
            client,
            fullart_url,
            censored_art_url,
            limiter,
        })
    }

    /// Asset URL for one variant: `{base}/{id}{0|1}.png`, digit = evolved flag.
    fn art_url(&self, id: u32, evolved: bool, censored: bool) -> String {
        let base = if censored {
            &self.censored_art_url
        } else {
            &self.fullart_url
        };
        format!("{}{}{}.png", base, id, u8::from(evolved))
    }
}

#[async_trait]
impl ArtSource for HttpArtSource {
    async fn fetch_art(&self, id: u32, evolved: bool, censored: bool) -> Result<ArtFetch> {
        self.limiter.acquire().await;

        let url = self.art_url(id, evolved, censored);
        let resp = match self.client.get(&url).send().await {
            Ok(resp) => resp,
            Err(e) if e.is_timeout() || e.is_connect() => {
                warn!("connection timed out with image: {}", url);
                return Ok(ArtFetch::TimedOut);
            }
            Err(e) => return Err(e.into()),
        };

        let status = resp.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(ArtFetch::NotFound);
        }
        if !status.is_success() {
            return Err(SyncError::Download {
                id,
                evolved,
                censored,
                status: status.as_u16(),
            });
        }

        let bytes = resp.bytes().await?;
        debug!("art fetched: {} ({} bytes)", url, bytes.len());
        Ok(ArtFetch::Image(bytes))
    }
}
