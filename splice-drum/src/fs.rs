//! File helpers around the in-memory codec

use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};

use crate::MAX_SPLICE_BYTES;
use crate::codec::Codec;
use crate::model::Pattern;
use crate::options::CodecOptions;

/// Read a .splice file into memory, refusing anything over
/// [`MAX_SPLICE_BYTES`].
///
/// The cap is enforced on the bytes actually read rather than on the size
/// reported up front, so pipes and files that grow while being read are
/// bounded too.
pub fn read_splice_bytes(path: &Path) -> Result<Vec<u8>> {
    let file =
        File::open(path).with_context(|| format!("Failed to open file: {}", path.display()))?;
    let size_hint = file
        .metadata()
        .map(|m| m.len().min(MAX_SPLICE_BYTES) as usize)
        .unwrap_or(0);

    let mut data = Vec::with_capacity(size_hint);
    file.take(MAX_SPLICE_BYTES + 1)
        .read_to_end(&mut data)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;

    if data.len() as u64 > MAX_SPLICE_BYTES {
        anyhow::bail!(
            "File too large: {} (more than {} bytes)",
            path.display(),
            MAX_SPLICE_BYTES
        );
    }
    Ok(data)
}

/// Decode the pattern stored at `path`
pub fn decode_file(path: &Path, options: &CodecOptions) -> Result<Pattern> {
    let data = read_splice_bytes(path)?;
    Codec::new(*options)
        .decode(&data)
        .with_context(|| format!("Failed to decode pattern: {}", path.display()))
}

/// Encode `pattern` and write it to `path`
pub fn encode_file(path: &Path, pattern: &Pattern, options: &CodecOptions) -> Result<()> {
    let data = Codec::new(*options)
        .encode(pattern)
        .with_context(|| format!("Failed to encode pattern for {}", path.display()))?;
    std::fs::write(path, data)
        .with_context(|| format!("Failed to write file: {}", path.display()))
}
