use std::fs::{self, File};
use std::io::Write;
use std::time::Duration;

use anyhow::{Context, Result};
use lexfetch_config::Config;
use lexfetch_core::{DictionaryApi, Resolver};

use crate::backup;

/// Process the whole word list: resolve each word in order, stream
/// successes to the output file, collect failures for the dead letter
/// queue, then archive the input file. Per-word failures never abort the
/// run; only file I/O errors do.
pub async fn run<A: DictionaryApi>(config: &Config, resolver: &Resolver<A>) -> Result<()> {
    tracing::info!("Reading data input file for processing");
    let raw = fs::read_to_string(&config.in_file)
        .with_context(|| format!("failed to read input file {}", config.in_file.display()))?;
    let words: Vec<&str> = raw.lines().collect();

    tracing::info!("{} word(s) loaded from input file", words.len());

    let mut out = File::create(&config.out_file)
        .with_context(|| format!("failed to create output file {}", config.out_file.display()))?;

    let mut failed: Vec<&str> = Vec::new();
    let mut resolved_count = 0usize;

    for &word in &words {
        tokio::time::sleep(Duration::from_secs(config.throttle_secs)).await;

        tracing::info!("Retrieving definition from API for {word}");
        let lookup = resolver.resolve(word).await;

        if lookup.is_resolved() {
            tracing::info!("Definition for {word} retrieved successfully");
            writeln!(out, "{}{}{}", word, config.divider, lookup.text).with_context(|| {
                format!("failed to write to output file {}", config.out_file.display())
            })?;
            resolved_count += 1;
        } else {
            tracing::error!(
                "Failed to retrieve definition for {word} - ErrorCode: {} - {}",
                lookup.status,
                lookup.text
            );
            failed.push(word);
        }
    }

    tracing::info!("Saving dead letter queue to {}", config.error_file.display());
    let mut dlq = String::new();
    for word in &failed {
        dlq.push_str(word);
        dlq.push('\n');
    }
    fs::write(&config.error_file, dlq)
        .with_context(|| format!("failed to write error file {}", config.error_file.display()))?;

    tracing::info!("Backing up processed data file");
    backup::archive(&config.in_file)?;

    tracing::info!(
        "STATISTICS: {} word(s) loaded - {} definition(s) retrieved - {} error(s)",
        words.len(),
        resolved_count,
        failed.len()
    );

    Ok(())
}
