use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Local;
use lexfetch_config::Config;

/// Rename leftover output and error files from a previous run so this run
/// starts with a clean slate.
pub fn backup_previous(config: &Config) -> Result<()> {
    for path in [&config.out_file, &config.error_file] {
        if path.exists() {
            tracing::info!("Backing up {}", path.display());
            rename_with_timestamp(path)?;
        }
    }
    Ok(())
}

/// Archive a processed file under a timestamped name.
pub fn archive(path: &Path) -> Result<()> {
    rename_with_timestamp(path)
}

fn rename_with_timestamp(path: &Path) -> Result<()> {
    let timestamp = Local::now().format("%Y%m%d-%H%M%S").to_string();
    let stamped = stamped_name(path, &timestamp);
    fs::rename(path, &stamped)
        .with_context(|| format!("failed to rename {} to {}", path.display(), stamped.display()))
}

/// "defs.txt" becomes "defs_<timestamp>.txt"; an extensionless name just
/// gets the suffix appended.
pub(crate) fn stamped_name(path: &Path, timestamp: &str) -> PathBuf {
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or_default();

    let name = match path.extension().and_then(|e| e.to_str()) {
        Some(ext) => format!("{stem}_{timestamp}.{ext}"),
        None => format!("{stem}_{timestamp}"),
    };

    path.with_file_name(name)
}
