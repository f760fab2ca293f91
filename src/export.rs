use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use log::info;

/// Render final ratings as the downloadable artifact: one line per item
/// in index order, `Item {1-based index}: {rating}`.
///
/// The raw floating-point value is emitted, unlike the two-decimal
/// on-screen table, so the file round-trips losslessly.
pub fn render_scores(ratings: &[f64]) -> String {
    ratings
        .iter()
        .enumerate()
        .map(|(index, rating)| format!("Item {}: {}", index + 1, rating))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn write_scores(path: &Path, ratings: &[f64]) -> Result<()> {
    fs::write(path, render_scores(ratings))
        .with_context(|| format!("Failed to write scores file: {}", path.display()))?;

    info!("Exported {} ratings to {}", ratings.len(), path.display());
    Ok(())
}

pub fn read_scores(path: &Path) -> Result<Vec<f64>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read scores file: {}", path.display()))?;
    parse_scores(&contents)
}

/// Parse a previously exported scores file back into a rating vector.
/// Lines must appear in index order.
pub fn parse_scores(contents: &str) -> Result<Vec<f64>> {
    contents
        .lines()
        .enumerate()
        .map(|(index, line)| parse_line(index, line))
        .collect()
}

fn parse_line(index: usize, line: &str) -> Result<f64> {
    let prefix = format!("Item {}: ", index + 1);
    let value = line
        .strip_prefix(&prefix)
        .with_context(|| format!("Malformed scores line {}: {line:?}", index + 1))?;

    value
        .parse()
        .with_context(|| format!("Invalid rating on line {}: {value:?}", index + 1))
}
