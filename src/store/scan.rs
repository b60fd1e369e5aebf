use std::path::{Path, PathBuf};

use tokio::task::JoinSet;
use tracing::warn;

use super::sidecar::read_sidecar;
use crate::config::SIDECAR_EXTENSION;
use crate::error::{Result, SyncError};
use crate::sync::IoPool;
use crate::variant::CardVariant;

/// Reconstruct the variant records saved under `dir` from their sidecars.
///
/// Only sidecars whose companion image file exists count; sidecars without an
/// image and images without a sidecar are treated as incomplete and ignored, so
/// the variant is re-fetched. A sidecar that fails to parse is logged and
/// skipped; it never aborts the scan. Entries are read and parsed on the
/// blocking pool with bounded parallelism.
pub async fn scan(dir: &Path, pool: &IoPool) -> Result<Vec<CardVariant>> {
    if !dir.exists() {
        return Ok(Vec::new());
    }

    let entries = {
        let dir = dir.to_path_buf();
        pool.run(move || {
            let mut entries: Vec<PathBuf> = Vec::new();
            for entry in std::fs::read_dir(&dir)? {
                entries.push(entry?.path());
            }
            Ok(entries)
        })
        .await?
    };

    let mut tasks = JoinSet::new();
    for path in entries {
        if path.extension().and_then(|e| e.to_str()) != Some(SIDECAR_EXTENSION) {
            continue;
        }
        let pool = pool.clone();
        tasks.spawn(async move { pool.run(move || Ok(read_record(&path))).await });
    }

    let mut records = Vec::new();
    while let Some(joined) = tasks.join_next().await {
        if let Some(record) = joined.map_err(|e| SyncError::Task(e.to_string()))?? {
            records.push(record);
        }
    }
    Ok(records)
}

fn read_record(sidecar: &Path) -> Option<CardVariant> {
    if !sidecar.is_file() || !sidecar.with_extension("").is_file() {
        return None;
    }
    match read_sidecar(sidecar) {
        Ok(record) => Some(record),
        Err(e) => {
            warn!("{}", e);
            None
        }
    }
}
