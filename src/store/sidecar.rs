// Sidecar codec — the full variant record plus denormalized search tags, as JSON.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SyncError};
use crate::variant::CardVariant;

/// On-disk sidecar document. Card data is namespaced under `svgdb`; `dc.subject`
/// carries denormalized tags (id/craft/rarity/type) for external catalog tools.
#[derive(Debug, Serialize, Deserialize)]
pub struct Sidecar {
    pub svgdb: CardVariant,
    #[serde(rename = "dc.subject", default)]
    pub subject: Vec<String>,
}

impl Sidecar {
    pub fn new(variant: CardVariant) -> Self {
        let card = &variant.card;
        let subject = vec![
            format!("svgdb:{}", card.id),
            format!("svgdb:{}", card.craft.as_str()),
            format!("svgdb:{}", card.rarity.as_str()),
            format!("svgdb:{}", card.card_type.as_str()),
        ];
        Self {
            svgdb: variant,
            subject,
        }
    }
}

/// Serialize and write the sidecar for `variant` to `path`. Overwrites in place.
pub fn write_sidecar(path: &Path, variant: &CardVariant) -> Result<()> {
    let doc = Sidecar::new(variant.clone());
    std::fs::write(path, serde_json::to_vec_pretty(&doc)?)?;
    Ok(())
}

/// Parse one sidecar file back into the variant record it was written from.
pub fn read_sidecar(path: &Path) -> Result<CardVariant> {
    let bytes = std::fs::read(path)?;
    let doc: Sidecar = serde_json::from_slice(&bytes).map_err(|e| SyncError::SidecarParse {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    Ok(doc.svgdb)
}
