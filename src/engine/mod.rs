// Similarity engine: n-gram fingerprinting and dialect scoring.
//
// Pure, synchronous computation. Nothing in here touches the filesystem;
// profile stores and target text are handed in by the caller.

pub mod classify;
pub mod distribution;
pub mod ngrams;
pub mod overlap;

use anyhow::Result;

pub use classify::{classify, DetectionResult};
pub use distribution::{build_distribution, NGramDistribution};
pub use ngrams::{extract_ngrams, truncate_chars};
pub use overlap::overlap_score;

/// Length of each n-gram, in characters.
pub const DEFAULT_NGRAM_SIZE: usize = 3;
/// Power applied to each overlap score before normalization.
pub const DEFAULT_AMPLIFICATION_POWER: i32 = 8;
/// Only this many leading characters of a target are analyzed.
pub const DEFAULT_TRUNCATION_LIMIT: usize = 20_000;

/// Tunable parameters for a classification run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    pub ngram_size: usize,
    /// Sharpening exponent. This is a heuristic: the normalized output sums
    /// to 100 but is not a calibrated probability.
    pub amplification_power: i32,
    pub truncation_limit: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            ngram_size: DEFAULT_NGRAM_SIZE,
            amplification_power: DEFAULT_AMPLIFICATION_POWER,
            truncation_limit: DEFAULT_TRUNCATION_LIMIT,
        }
    }
}

impl EngineConfig {
    /// Reject parameter combinations that can never produce a fingerprint.
    pub fn validate(&self) -> Result<()> {
        if self.ngram_size == 0 {
            anyhow::bail!("n-gram size must be at least 1");
        }
        // 0.0.powi(n) is inf for n < 0, and powi(0) flattens every category to 1
        if self.amplification_power < 1 {
            anyhow::bail!(
                "amplification power must be at least 1, got {}",
                self.amplification_power
            );
        }
        Ok(())
    }
}
