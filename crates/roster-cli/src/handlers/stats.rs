//! Stats command handler.

use anyhow::Result;
use roster_core::Statistics;

use crate::bootstrap::CliContext;

/// Print classmate counts per country and per city.
pub async fn execute(ctx: &CliContext) -> Result<()> {
    let stats = ctx.roster.statistics().await?;
    print!("{}", render(&stats));
    Ok(())
}

fn render(stats: &Statistics) -> String {
    let mut out = format!("Total classmates: {}\n", stats.total);

    out.push_str("\nBy country:\n");
    for (country, count) in &stats.country_stats {
        out.push_str(&format!("  {country:<20} {count}\n"));
    }

    out.push_str("\nBy city:\n");
    for (city, count) in &stats.city_stats {
        out.push_str(&format!("  {city:<20} {count}\n"));
    }
    out
}
