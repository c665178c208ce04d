// NGramDistribution: relative n-gram frequencies, as percentages.
//
// Backed by a BTreeMap so iteration order is fixed. Overlap scores are
// float sums over this order, and a fixed order keeps them bit-identical
// from run to run.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Mapping from n-gram to its share of all n-gram occurrences in a sample.
///
/// Values sum to 100 (within float tolerance) or the map is empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NGramDistribution {
    frequencies: BTreeMap<String, f64>,
}

impl NGramDistribution {
    /// Wrap precomputed frequencies, e.g. from a stored profile.
    ///
    /// No normalization is applied; the caller is trusted to hand in
    /// percentages.
    pub fn from_frequencies(frequencies: BTreeMap<String, f64>) -> Self {
        Self { frequencies }
    }

    /// Frequency of a single n-gram, if present.
    pub fn get(&self, ngram: &str) -> Option<f64> {
        self.frequencies.get(ngram).copied()
    }

    /// Iterate `(ngram, frequency)` pairs in sorted n-gram order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.frequencies.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Number of distinct n-grams.
    pub fn len(&self) -> usize {
        self.frequencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frequencies.is_empty()
    }

    /// Sum of all frequencies (100 for a built distribution, 0 when empty).
    pub fn total(&self) -> f64 {
        self.frequencies.values().sum()
    }
}

/// Count each distinct n-gram and convert counts to percentages of the total.
///
/// An empty sequence gives an empty distribution rather than dividing by zero.
pub fn build_distribution<I, S>(ngrams: I) -> NGramDistribution
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut counts: BTreeMap<String, u64> = BTreeMap::new();
    let mut total: u64 = 0;
    for ngram in ngrams {
        *counts.entry(ngram.into()).or_insert(0) += 1;
        total += 1;
    }

    if total == 0 {
        return NGramDistribution::default();
    }

    let frequencies = counts
        .into_iter()
        .map(|(ngram, count)| (ngram, (count as f64 / total as f64) * 100.0))
        .collect();

    NGramDistribution { frequencies }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_become_percentages() {
        let dist = build_distribution(["end", "end", "fun", "loc"]);
        assert_eq!(dist.len(), 3);
        assert!((dist.get("end").unwrap() - 50.0).abs() < 1e-9);
        assert!((dist.get("fun").unwrap() - 25.0).abs() < 1e-9);
        assert!((dist.get("loc").unwrap() - 25.0).abs() < 1e-9);
        assert!((dist.total() - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_sequence() {
        let dist = build_distribution(Vec::<String>::new());
        assert!(dist.is_empty());
        assert_eq!(dist.total(), 0.0);
    }

    #[test]
    fn test_serializes_as_plain_object() {
        let dist = build_distribution(["abc", "abc"]);
        let json = serde_json::to_string(&dist).unwrap();
        assert_eq!(json, r#"{"abc":100.0}"#);

        let back: NGramDistribution = serde_json::from_str(&json).unwrap();
        assert_eq!(back, dist);
    }

    #[test]
    fn test_iter_is_sorted() {
        let dist = build_distribution(["zzz", "aaa", "mmm"]);
        let keys: Vec<&str> = dist.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["aaa", "mmm", "zzz"]);
    }
}
