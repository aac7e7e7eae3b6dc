//! Init command implementation.

use anyhow::{bail, Result};
use std::path::Path;

const DEFAULT_CONFIG: &str = r#"# arch-harvest configuration

[scan]
# Root directory containing one subdirectory per repository
root = "repos"

# Source-file extensions to process; everything else is ignored
extensions = ["java"]

# Glob patterns to exclude from the scan
exclude = [
    "**/target/**",
    "**/build/**",
    "**/.git/**",
]

[output]
# Dataset file path
path = "architecture_aware_anti_patterns.csv"
"#;

/// Runs the init command.
pub fn run(force: bool) -> Result<()> {
    let config_path = Path::new("arch-harvest.toml");

    if config_path.exists() && !force {
        bail!(
            "Configuration file already exists at {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    std::fs::write(config_path, DEFAULT_CONFIG)?;

    println!("Created arch-harvest.toml");
    println!("\nNext steps:");
    println!("  1. Edit arch-harvest.toml to point at your repositories root");
    println!("  2. Run: arch-harvest scan");

    Ok(())
}
