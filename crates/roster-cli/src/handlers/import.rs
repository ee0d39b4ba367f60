//! Import command handler.
//!
//! Reads a JSON array of classmate records from disk and upserts it the
//! same way `POST /api/classmates/batch` does.

use std::path::Path;

use anyhow::{Context, Result};
use roster_core::BatchSummary;
use serde_json::Value;

use crate::bootstrap::CliContext;

/// Execute the import command and print the summary.
pub async fn execute(ctx: &CliContext, file: &Path) -> Result<BatchSummary> {
    let raw = tokio::fs::read_to_string(file)
        .await
        .with_context(|| format!("Failed to read {}", file.display()))?;
    let body: Value = serde_json::from_str(&raw)
        .with_context(|| format!("{} is not valid JSON", file.display()))?;

    let summary = ctx.roster.batch_upsert(&body).await?;

    println!(
        "Imported {}: {} updated, {} created, {} error(s)",
        file.display(),
        summary.updated,
        summary.created,
        summary.errors
    );
    for detail in &summary.error_details {
        println!("  - {detail}");
    }

    Ok(summary)
}
