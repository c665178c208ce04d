// Loading and saving profile stores.
//
// A store that fails to load never reaches the engine: missing files,
// malformed JSON and invalid frequencies are all reported here.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use super::ProfileStore;

/// Read, parse and validate a profile store from a JSON file.
pub fn load(path: &Path) -> Result<ProfileStore> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read profile store {}", path.display()))?;
    let store: ProfileStore = serde_json::from_str(&json)
        .with_context(|| format!("Malformed profile store {}", path.display()))?;
    validate(&store).with_context(|| format!("Invalid profile store {}", path.display()))?;

    info!(
        path = %path.display(),
        categories = store.len(),
        "Loaded profile store"
    );
    Ok(store)
}

/// Write a store as pretty-printed JSON, creating parent directories.
pub fn save(store: &ProfileStore, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    let json = serde_json::to_string_pretty(store)?;
    fs::write(path, json)
        .with_context(|| format!("Failed to write profile store {}", path.display()))?;

    info!(
        path = %path.display(),
        categories = store.len(),
        "Saved profile store"
    );
    Ok(())
}

/// Every frequency must be a finite, non-negative percentage.
pub fn validate(store: &ProfileStore) -> Result<()> {
    for (category, dist) in store.iter() {
        if category.is_empty() {
            anyhow::bail!("Category with an empty name");
        }
        if let Some((ngram, freq)) = dist
            .iter()
            .find(|(_, freq)| !freq.is_finite() || *freq < 0.0)
        {
            anyhow::bail!("Category `{category}` has invalid frequency {freq} for n-gram {ngram:?}");
        }
    }
    Ok(())
}
