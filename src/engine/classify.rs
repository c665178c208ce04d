// Classification: score a target text against every profile in a store.
//
// Pipeline per call:
// 1. Truncate the target to its first `truncation_limit` characters
// 2. Extract n-grams and build the target distribution
// 3. Overlap against each profile, raised to `amplification_power`
// 4. Normalize the amplified scores to percentages
// 5. Sort by confidence, highest first
//
// The amplification step magnifies small overlap differences so the top
// category stands out. The output sums to 100 but is a heuristic ranking,
// not a calibrated probability.

use serde::Serialize;
use tracing::debug;

use super::distribution::build_distribution;
use super::ngrams::{extract_ngrams, truncate_chars};
use super::overlap::overlap_score;
use super::EngineConfig;
use crate::profiles::ProfileStore;

/// How well a target matched one category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetectionResult {
    /// Category name from the profile store
    pub category: String,
    /// Amplified overlap (overlap ^ amplification_power)
    pub score: f64,
    /// This category's share of the summed scores, 0.0 to 100.0
    pub confidence: f64,
}

impl DetectionResult {
    /// True when this category received any share of the confidence.
    pub fn is_match(&self) -> bool {
        self.confidence > 0.0
    }
}

/// Rank every category in `store` by similarity to `text`.
///
/// Returns an empty list when the target has fewer than `ngram_size`
/// non-whitespace characters after truncation: no determination is
/// possible. Otherwise there is one result per category. When no
/// category shares a single n-gram with the target, every confidence is
/// 0.0 and the list does not sum to 100.
///
/// Equal confidences keep the store's insertion order.
pub fn classify(text: &str, store: &ProfileStore, config: &EngineConfig) -> Vec<DetectionResult> {
    let truncated = truncate_chars(text, config.truncation_limit);
    let ngrams = extract_ngrams(truncated, config.ngram_size);
    if ngrams.is_empty() {
        debug!("No analyzable content in target");
        return Vec::new();
    }

    let ngram_count = ngrams.len();
    let target = build_distribution(ngrams);

    let mut results: Vec<DetectionResult> = store
        .iter()
        .map(|(category, profile)| {
            let overlap = overlap_score(&target, profile);
            DetectionResult {
                category: category.to_string(),
                score: overlap.powi(config.amplification_power),
                confidence: 0.0,
            }
        })
        .collect();

    let total_score: f64 = results.iter().map(|r| r.score).sum();
    if total_score > 0.0 {
        for result in &mut results {
            result.confidence = (result.score / total_score) * 100.0;
        }
    }

    // Stable sort: ties stay in store order
    results.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));

    debug!(
        ngrams = ngram_count,
        distinct = target.len(),
        categories = results.len(),
        top = results.first().map(|r| r.category.as_str()).unwrap_or(""),
        "Classified target"
    );

    results
}
