//! List rules command implementation.

use arch_harvest_rules::families;

/// Runs the list-rules command.
pub fn run() {
    println!("Violation rule tables (evaluated in order):\n");
    println!("{:<20} {:<3} {:<45} Severity", "Family", "#", "Tag");
    println!("{}", "-".repeat(80));

    for (family, rules) in families() {
        for (position, rule) in rules.iter().enumerate() {
            println!(
                "{:<20} {:<3} {:<45} {}",
                family,
                position + 1,
                rule.tag,
                rule.severity
            );
        }
    }

    println!("\nThe common family always runs after the style-specific family.");
    println!("Severity only ever rises while a file's tables are evaluated.");
}
