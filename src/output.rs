use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::info;

use crate::record::FollowerRecord;

pub const OUTPUT_FILE: &str = "data.json";

/// Writes `record` as 2-space indented JSON, replacing any existing file.
pub fn write_record(path: &Path, record: &FollowerRecord) -> Result<()> {
    let json =
        serde_json::to_string_pretty(record).context("Failed to serialize follower record")?;

    fs::write(path, &json).with_context(|| format!("Failed to write {:?}", path))?;

    info!(action = "write", component = "output", file_path = ?path, bytes = json.len(), entries = record.followers_by_day.len(), "Wrote follower record");
    Ok(())
}

pub fn read_record(path: &Path) -> Result<FollowerRecord> {
    let content = fs::read_to_string(path).with_context(|| format!("Failed to read {:?}", path))?;
    serde_json::from_str(&content).with_context(|| format!("Invalid follower record in {:?}", path))
}
