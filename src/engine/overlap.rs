// Histogram intersection between two n-gram distributions.
//
// For each n-gram the target shares with the profile we add the smaller
// of the two frequencies:
//
//   overlap = sum(min(freq_target[g], freq_profile[g]))
//
// N-grams on only one side contribute nothing, so walking the target's
// keys alone gives the full intersection. Both sides are percentage
// distributions, so the score runs from 0.0 (nothing shared) to 100.0
// (identical).

use super::distribution::NGramDistribution;

/// Compute the bounded overlap between a target and a profile distribution.
///
/// Shared keys are visited in sorted order whichever side is passed first,
/// so swapping the arguments gives a bit-identical result. An empty
/// distribution on either side scores 0.0.
pub fn overlap_score(target: &NGramDistribution, profile: &NGramDistribution) -> f64 {
    let mut overlap = 0.0;
    for (ngram, freq) in target.iter() {
        if let Some(profile_freq) = profile.get(ngram) {
            overlap += freq.min(profile_freq);
        }
    }
    overlap
}
