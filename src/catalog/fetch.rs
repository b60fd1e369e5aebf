use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

use reqwest::Client;
use tracing::debug;

use super::model::CanonicalCard;
use crate::config::USER_AGENT;
use crate::error::{Result, SyncError};
use crate::limit::RateLimiter;

/// Fetches the card catalog and the censored-id set. Two GETs, no retry,
/// no pagination; any transport or validation failure is fatal to the run.
pub struct CatalogClient {
    client: Client,
    api_url: String,
    limiter: Arc<RateLimiter>,
}

impl CatalogClient {
    pub fn new(api_url: String, limiter: Arc<RateLimiter>) -> Self {
        Self {
            client: Client::new(),
            api_url,
            limiter,
        }
    }

    /// Fetch the full catalog and the censored-id set concurrently, each call
    /// individually rate-limited.
    pub async fn fetch_catalog(&self) -> Result<(BTreeMap<u32, CanonicalCard>, HashSet<u32>)> {
        tokio::try_join!(self.get_cards(), self.get_censored_ids())
    }

    async fn get_cards(&self) -> Result<BTreeMap<u32, CanonicalCard>> {
        let body = self.get(&format!("{}en", self.api_url), "catalog").await?;
        let cards: BTreeMap<u32, CanonicalCard> = serde_json::from_slice(&body)
            .map_err(|e| SyncError::Fetch(format!("catalog response failed validation: {e}")))?;
        debug!("catalog fetched: {} cards", cards.len());
        Ok(cards)
    }

    async fn get_censored_ids(&self) -> Result<HashSet<u32>> {
        let body = self
            .get(&format!("{}censored", self.api_url), "censored ids")
            .await?;
        let ids: HashSet<u32> = serde_json::from_slice(&body).map_err(|e| {
            SyncError::Fetch(format!("censored-id response failed validation: {e}"))
        })?;
        debug!("censored ids fetched: {}", ids.len());
        Ok(ids)
    }

    async fn get(&self, url: &str, what: &str) -> Result<bytes::Bytes> {
        self.limiter.acquire().await;
        let resp = self
            .client
            .get(url)
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .send()
            .await
            .map_err(|e| SyncError::Fetch(format!("{what} request failed: {e}")))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(SyncError::Fetch(format!(
                "{what} request failed: HTTP {}",
                status.as_u16()
            )));
        }

        resp.bytes()
            .await
            .map_err(|e| SyncError::Fetch(format!("{what} body read failed: {e}")))
    }
}
