// Result formatting — percentage rendering and the terminal summary.

use std::path::Path;

use colored::Colorize;

/// Render a similarity score as a percentage with exactly two decimal
/// digits and a trailing '%', e.g. 0.8567 → "85.67%".
///
/// Rust's float formatter rounds ties to even (0.40625 → "40.62%"). With
/// two decimals, exact midpoints are effectively unreachable for real
/// document pairs.
pub fn format_percent(score: f64) -> String {
    format!("{:.2}%", score * 100.0)
}

/// Print the success-path summary to stdout.
pub fn display_summary(formatted: &str, result_path: &Path) {
    println!("Similarity: {}", formatted.bold());
    println!("Result written to: {}", result_path.display());
}
