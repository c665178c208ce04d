// Output formatting: terminal report and bar rendering.

pub mod terminal;

/// Percentage points represented by one bar cell.
pub const PERCENT_PER_CELL: f64 = 2.5;

/// Build a `#` bar for a confidence percentage, padded with spaces to `width`.
///
/// One cell per 2.5 percentage points, truncated toward zero, so a full
/// 100% bar is 40 cells. Out-of-range input is clamped to the width.
pub fn confidence_bar(confidence: f64, width: usize) -> String {
    let cells = if confidence.is_finite() && confidence > 0.0 {
        ((confidence / PERCENT_PER_CELL) as usize).min(width)
    } else {
        0
    };
    format!("{}{}", "#".repeat(cells), " ".repeat(width - cells))
}
