// Colored terminal output for detection reports and profile listings.

use std::path::Path;
use std::time::Duration;

use colored::Colorize;

use super::confidence_bar;
use crate::engine::DetectionResult;
use crate::profiles::ProfileStore;

const BAR_WIDTH: usize = 40;

/// What a ranked result list amounts to.
#[derive(Debug, PartialEq)]
pub enum Verdict<'a> {
    /// Too little text to fingerprint (empty result list)
    NoContent,
    /// Every category scored zero overlap
    NoMatch,
    /// The top-ranked category, with nonzero confidence
    Detected(&'a DetectionResult),
}

/// Pick the headline for a ranked result list.
pub fn verdict(results: &[DetectionResult]) -> Verdict<'_> {
    match results.first() {
        None => Verdict::NoContent,
        Some(top) if !top.is_match() => Verdict::NoMatch,
        Some(top) => Verdict::Detected(top),
    }
}

/// Display the ranked detection for one target file.
pub fn display_detection(target: &Path, results: &[DetectionResult], elapsed: Duration) {
    let top = match verdict(results) {
        Verdict::NoContent => {
            println!("{} no script or no match.", "[!]".yellow());
            return;
        }
        Verdict::NoMatch => {
            println!(
                "{} {} shares no n-grams with any profile. No match.",
                "[!]".yellow(),
                target.display()
            );
            return;
        }
        Verdict::Detected(top) => top,
    };

    println!("\n{}", "=".repeat(45));
    println!("PRIMARY DETECTION: {}", top.category.to_uppercase().bold());
    println!("CONFIDENCE:        {:.2}%", top.confidence);
    println!("{}", "=".repeat(45));

    println!("\n{}", "[INFO]".dimmed());
    for (i, result) in results.iter().enumerate() {
        let bar = confidence_bar(result.confidence, BAR_WIDTH);
        let colored_bar = if i == 0 {
            bar.bright_green()
        } else if result.confidence >= 10.0 {
            bar.bright_yellow()
        } else {
            bar.bright_blue()
        };
        println!(
            "{:<15} | {} | {:>6.2}%",
            result.category, colored_bar, result.confidence
        );
    }

    println!(
        "\n{}",
        format!("Took: {:.2}ms", elapsed.as_secs_f64() * 1000.0).dimmed()
    );
}

/// List every category in a store with its distinct n-gram count.
pub fn display_profiles(store: &ProfileStore) {
    if store.is_empty() {
        println!("Profile store is empty. Run `scriptsniff train <dir>` first.");
        return;
    }

    println!(
        "\n{}",
        format!("=== Profiles ({} categories) ===", store.len()).bold()
    );
    println!();
    println!("  {:<24} {:>10}", "Category".dimmed(), "N-grams".dimmed());
    println!("  {}", "-".repeat(35).dimmed());
    for (name, dist) in store.iter() {
        println!("  {:<24} {:>10}", name, dist.len());
    }
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(category: &str, score: f64, confidence: f64) -> DetectionResult {
        DetectionResult {
            category: category.to_string(),
            score,
            confidence,
        }
    }

    #[test]
    fn test_empty_results_have_no_content() {
        assert_eq!(verdict(&[]), Verdict::NoContent);
    }

    #[test]
    fn test_all_zero_confidence_is_no_match() {
        let results = vec![result("luau", 0.0, 0.0), result("glua", 0.0, 0.0)];
        assert_eq!(verdict(&results), Verdict::NoMatch);
    }

    #[test]
    fn test_top_result_detected() {
        let results = vec![result("glua", 2.0, 80.0), result("luau", 0.5, 20.0)];
        assert_eq!(verdict(&results), Verdict::Detected(&results[0]));
    }
}
