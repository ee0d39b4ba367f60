//! List command handler.
//!
//! Displays every classmate in a formatted table.

use anyhow::Result;
use roster_core::Person;

use crate::bootstrap::CliContext;

/// Execute the list command.
pub async fn execute(ctx: &CliContext) -> Result<()> {
    let people = ctx.roster.list().await?;

    if people.is_empty() {
        println!("No classmates found in the database.");
        println!("Use 'roster import <file>' to add some.");
        return Ok(());
    }

    println!("Found {} classmate(s):\n", people.len());
    println!(
        "{:<6} {:<20} {:<16} {:<16} {:>10} {:>11}",
        "ID", "Name", "City", "Country", "Lat", "Lng"
    );
    println!("{}", "-".repeat(84));

    for person in &people {
        println!("{}", format_row(person));
    }

    Ok(())
}

fn format_row(person: &Person) -> String {
    format!(
        "{:<6} {:<20} {:<16} {:<16} {:>10.4} {:>11.4}",
        person.id,
        person.name,
        person.city,
        person.country,
        person.location.lat,
        person.location.lng
    )
}
