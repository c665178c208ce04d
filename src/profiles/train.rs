// Training: build a profile store from a directory of sample scripts.
//
// Layout:
//
//   samples/
//     luau/    *.lua ...
//     glua/    *.lua ...
//
// Each immediate subdirectory is a category; every file under it
// (recursively) is a sample. Samples are read leniently and their
// n-grams extracted one file at a time so no n-gram spans two files.
// Training never truncates; the whole sample counts.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{info, warn};

use super::ProfileStore;
use crate::engine::{build_distribution, extract_ngrams, EngineConfig};
use crate::input::read_lossy;

/// Build a store with one profile per category subdirectory of `dir`.
///
/// Categories are added in name order. A category whose samples yield no
/// n-grams is skipped with a warning.
pub fn train_from_dir(dir: &Path, config: &EngineConfig) -> Result<ProfileStore> {
    config.validate()?;

    let categories = sorted_entries(dir)?
        .into_iter()
        .filter(|path| path.is_dir())
        .collect::<Vec<_>>();

    if categories.is_empty() {
        anyhow::bail!(
            "No category directories found in {}\n\
             Expected one subdirectory of samples per category.",
            dir.display()
        );
    }

    let pb = ProgressBar::new(categories.len() as u64);
    pb.set_style(ProgressStyle::default_bar().template("  Training [{bar:30}] {pos}/{len} {msg}")?);

    let mut store = ProfileStore::new();
    for category_dir in &categories {
        let Some(name) = category_dir.file_name().and_then(|n| n.to_str()) else {
            warn!(path = %category_dir.display(), "Skipping category with non UTF-8 name");
            pb.inc(1);
            continue;
        };
        pb.set_message(name.to_string());

        let mut samples = Vec::new();
        collect_files(category_dir, &mut samples)?;

        let mut ngrams = Vec::new();
        for sample in &samples {
            let text = read_lossy(sample)?;
            ngrams.extend(extract_ngrams(&text, config.ngram_size));
        }

        if ngrams.is_empty() {
            warn!(category = name, samples = samples.len(), "No n-grams in samples, skipping");
            pb.inc(1);
            continue;
        }

        let ngram_count = ngrams.len();
        let distribution = build_distribution(ngrams);
        info!(
            category = name,
            samples = samples.len(),
            ngrams = ngram_count,
            distinct = distribution.len(),
            "Built profile"
        );
        store.insert(name, distribution);
        pb.inc(1);
    }
    pb.finish_and_clear();

    if store.is_empty() {
        anyhow::bail!("No usable samples found under {}", dir.display());
    }
    Ok(store)
}

/// Non-hidden entries of a directory, sorted by path.
fn sorted_entries(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut entries = Vec::new();
    for entry in fs::read_dir(dir).with_context(|| format!("Failed to list {}", dir.display()))? {
        let path = entry?.path();
        let hidden = path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| n.starts_with('.'));
        if !hidden {
            entries.push(path);
        }
    }
    entries.sort();
    Ok(entries)
}

fn collect_files(dir: &Path, out: &mut Vec<PathBuf>) -> Result<()> {
    for path in sorted_entries(dir)? {
        if path.is_dir() {
            collect_files(&path, out)?;
        } else if path.is_file() {
            out.push(path);
        }
    }
    Ok(())
}
