use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{error, warn};

use super::filename::{image_path, sidecar_path};
use super::sidecar::write_sidecar;
use crate::codec::write_optimized_png;
use crate::error::Result;
use crate::source::{ArtFetch, ArtSource};
use crate::sync::IoPool;
use crate::variant::CardVariant;

/// Download one variant's image and persist it with its sidecar.
///
/// Returns the image path on success and `None` for the non-fatal outcomes:
/// connect timeout (retry next run), asset missing upstream (warned unless the
/// card points back at an original card, in which case its own art is often
/// genuinely absent), or a persist failure (logged against this card only).
/// An unexpected error response propagates and fails this unit of work loudly.
pub async fn fetch_and_persist(
    source: Arc<dyn ArtSource>,
    variant: CardVariant,
    out_dir: &Path,
    pool: &IoPool,
) -> Result<Option<PathBuf>> {
    let art = source
        .fetch_art(variant.card.id, variant.evolved, variant.censored)
        .await?;

    let bytes = match art {
        ArtFetch::TimedOut => return Ok(None),
        ArtFetch::NotFound => {
            if variant.card.original_card.is_none() {
                warn!(
                    "card image not found for card '{}' | evolved: {} | censored: {}",
                    variant.card.id, variant.evolved, variant.censored
                );
            }
            return Ok(None);
        }
        ArtFetch::Image(bytes) => bytes,
    };

    let image = image_path(&variant, out_dir);
    let card_id = variant.card.id;

    let persisted = {
        let image = image.clone();
        // Sidecar first, then the image. Both overwrite in place.
        pool.run(move || {
            write_sidecar(&sidecar_path(&image), &variant)?;
            write_optimized_png(&bytes, &image)
        })
        .await
    };

    match persisted {
        Ok(()) => Ok(Some(image)),
        Err(e) => {
            error!("failed to save image for card '{}': {}", card_id, e);
            Ok(None)
        }
    }
}
