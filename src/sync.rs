// Run orchestration — fetch, expand, scan, diff, then fan out the downloads.

use std::path::PathBuf;
use std::sync::Arc;

use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{error, info};

use crate::catalog::CatalogClient;
use crate::config::SyncConfig;
use crate::error::{Result, SyncError};
use crate::limit::{RateLimit, RateLimiter};
use crate::reconcile::diff;
use crate::source::{ArtSource, HttpArtSource};
use crate::store::persist::fetch_and_persist;
use crate::store::scan::scan;
use crate::variant::{expand, CardVariant};

/// Semaphore-bounded hand-off to the blocking pool. File writes, image encoding
/// and sidecar parsing run here so they never stall the network tasks.
#[derive(Clone)]
pub struct IoPool {
    permits: Arc<Semaphore>,
}

impl IoPool {
    pub fn new(workers: usize) -> Self {
        Self {
            permits: Arc::new(Semaphore::new(workers)),
        }
    }

    /// Run `task` on the blocking pool, holding one worker permit for its duration.
    pub async fn run<T, F>(&self, task: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce() -> Result<T> + Send + 'static,
    {
        let _permit = self
            .permits
            .acquire()
            .await
            .map_err(|e| SyncError::Task(e.to_string()))?;
        tokio::task::spawn_blocking(task)
            .await
            .map_err(|e| SyncError::Task(e.to_string()))?
    }
}

/// Outcome of one run: how many of the `targets` download targets were saved,
/// skipped as non-fatal (timeout / missing upstream / persist failure), or
/// failed loudly.
#[derive(Debug, Clone, Copy)]
pub struct SyncReport {
    pub targets: usize,
    pub saved: usize,
    pub skipped: usize,
    pub failed: usize,
}

/// Execute one full mirror run. A catalog fetch failure is fatal and happens
/// before any side effects; everything after is isolated per variant.
pub async fn run(config: &SyncConfig) -> Result<SyncReport> {
    let limiter = Arc::new(RateLimiter::new(RateLimit::per_second(
        config.calls_per_second,
    )));

    let catalog = CatalogClient::new(config.api_url(), Arc::clone(&limiter));
    let (cards, censored_ids) = catalog.fetch_catalog().await?;
    info!(
        "catalog snapshot: {} cards, {} censored ids",
        cards.len(),
        censored_ids.len()
    );

    let remote: Vec<CardVariant> = cards
        .values()
        .flat_map(|card| expand(card, &censored_ids))
        .collect();

    let out_dir = PathBuf::from(&config.output_dir);
    std::fs::create_dir_all(&out_dir)?;

    let pool = IoPool::new(config.io_workers);
    let local = scan(&out_dir, &pool).await?;
    info!("local state: {} variant records", local.len());

    let targets = diff(&remote, local);
    let total = targets.len();
    info!("downloading {} images...", total);

    let source: Arc<dyn ArtSource> = Arc::new(HttpArtSource::new(
        config.fullart_url(),
        config.censored_art_url(),
        Arc::clone(&limiter),
    )?);

    let mut tasks = JoinSet::new();
    for variant in targets {
        let source = Arc::clone(&source);
        let pool = pool.clone();
        let out_dir = out_dir.clone();
        tasks.spawn(async move { fetch_and_persist(source, variant, &out_dir, &pool).await });
    }

    let mut report = SyncReport {
        targets: total,
        saved: 0,
        skipped: 0,
        failed: 0,
    };
    while let Some(joined) = tasks.join_next().await {
        match joined.map_err(|e| SyncError::Task(e.to_string()))? {
            Ok(Some(_)) => report.saved += 1,
            Ok(None) => report.skipped += 1,
            Err(e) => {
                error!("{}", e);
                report.failed += 1;
            }
        }
    }

    info!(
        "downloads finished: {} of {} saved ({} skipped, {} failed)",
        report.saved, report.targets, report.skipped, report.failed
    );
    Ok(report)
}
