// svgdb-mirror — incremental mirror of the svgdb.me card image database.
//
// One run fetches the remote catalog, expands each card into its downloadable
// variants, diffs them against the sidecar metadata already on disk, and downloads
// only what is missing or stale under a shared moving-window rate limit.

pub mod catalog;
#[cfg(test)]
pub(crate) mod fixtures;
pub mod codec;
pub mod config;
pub mod error;
pub mod limit;
pub mod reconcile;
pub mod source;
pub mod store;
pub mod sync;
pub mod variant;

pub use error::{Result, SyncError};
pub use sync::{run, SyncReport};
