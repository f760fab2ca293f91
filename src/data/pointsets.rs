use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use log::info;

use crate::domain::PointSet;

/// Load the fixed point-sets for a session from `dir`: one JSON file per
/// item, named by 1-based index (`1.json` .. `{count}.json`).
///
/// All files must be present and well-formed; the rating core assumes a
/// complete item set once the session starts.
pub fn load_pointsets(dir: &Path, count: usize) -> Result<Vec<PointSet>> {
    let mut pointsets = Vec::with_capacity(count);

    for index in 1..=count {
        pointsets.push(load_pointset(&dir.join(format!("{index}.json")))?);
    }

    info!("Loaded {} point-sets from {}", pointsets.len(), dir.display());
    Ok(pointsets)
}

fn load_pointset(path: &Path) -> Result<PointSet> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read point-set file: {}", path.display()))?;

    serde_json::from_str(&json)
        .with_context(|| format!("Failed to parse point-set file: {}", path.display()))
}
