// Deterministic filesystem paths — every variant field the external catalog
// tools sort on is baked into the image filename.

use std::path::{Path, PathBuf};

use crate::config::SIDECAR_EXTENSION;
use crate::variant::CardVariant;

/// Strip characters that are unsafe in filenames: ASCII control characters and
/// the reserved set `/\<>:"|?*`.
pub fn sanitize_filename(name: &str) -> String {
    name.chars()
        .filter(|c| !c.is_control() && !matches!(c, '/' | '\\' | '<' | '>' | ':' | '"' | '|' | '?' | '*'))
        .collect()
}

/// Collapse the upstream `artist` field. Slash-separated values are either a
/// romanization pair ("ABC/Abc", keep the first) or genuinely multiple names
/// (join with spaces).
fn normalize_artist(artist: &str) -> String {
    if artist.is_empty() {
        return String::new();
    }
    let parts: Vec<&str> = artist.split('/').collect();
    if parts.len() > 1 && parts[0].to_uppercase() == parts[1] {
        parts[0].to_string()
    } else {
        parts.join(" ")
    }
}

/// Image path for one variant:
/// `{id} {type} {craft} {evolved|unevolved} {censored|uncensored} {name} ({artist}) [] {}.png`
pub fn image_path(variant: &CardVariant, out_dir: &Path) -> PathBuf {
    let card = &variant.card;
    let evolved = if variant.evolved { "evolved" } else { "unevolved" };
    let censored = if variant.censored { "censored" } else { "uncensored" };
    let filename = format!(
        "{} {} {} {} {} {} ({}) [] {{}}.png",
        card.id,
        card.card_type.as_str(),
        card.craft.as_str(),
        evolved,
        censored,
        sanitize_filename(&card.name),
        normalize_artist(&card.artist),
    );
    out_dir.join(filename)
}

/// Sidecar path: the image filename plus the sidecar extension.
pub fn sidecar_path(image_path: &Path) -> PathBuf {
    let mut name = image_path.as_os_str().to_os_string();
    name.push(".");
    name.push(SIDECAR_EXTENSION);
    PathBuf::from(name)
}
