// Lenient target reading.
//
// Scripts in the wild are often mixed-encoding or carry binary junk.
// Invalid UTF-8 sequences are dropped rather than failing the read.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Read a file as text, dropping any bytes that aren't valid UTF-8.
pub fn read_lossy(path: &Path) -> Result<String> {
    let bytes = fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    Ok(decode_lossy(&bytes))
}

/// Decode UTF-8, skipping invalid sequences instead of substituting U+FFFD.
pub fn decode_lossy(bytes: &[u8]) -> String {
    let mut text = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        text.push_str(chunk.valid());
    }
    text
}
