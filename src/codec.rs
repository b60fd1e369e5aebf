// Image re-encode — decode whatever the remote served, write an optimized PNG.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use image::codecs::png::{CompressionType, FilterType, PngEncoder};

use crate::error::Result;

/// Decode `bytes` and re-encode to `path` as PNG with best compression.
pub fn write_optimized_png(bytes: &[u8], path: &Path) -> Result<()> {
    let img = image::load_from_memory(bytes)?;
    let file = File::create(path)?;
    let encoder = PngEncoder::new_with_quality(
        BufWriter::new(file),
        CompressionType::Best,
        FilterType::Adaptive,
    );
    img.write_with_encoder(encoder)?;
    Ok(())
}
