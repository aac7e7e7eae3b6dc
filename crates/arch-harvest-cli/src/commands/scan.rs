//! Scan command implementation.

use anyhow::{Context, Result};
use arch_harvest_core::{Analyzer, Config};
use arch_harvest_rules::BuiltinRules;
use std::path::Path;

use crate::config_resolver::{self, ConfigSource};
use crate::OutputFormat;

/// Runs the scan command.
pub fn run(
    path: Option<&Path>,
    output: Option<&Path>,
    format: OutputFormat,
    exclude: Vec<String>,
    config_flag: Option<&Path>,
) -> Result<()> {
    let source = config_resolver::resolve(Path::new("."), config_flag);
    let config = match &source {
        ConfigSource::Default => Config::default(),
        other => {
            // Invariant: non-Default variants always have a path
            let p = other.path().context("resolved config has no path")?;
            if source.is_global() {
                tracing::info!("Using global config: {}", p.display());
            }
            Config::from_file(p)
                .with_context(|| format!("Failed to load config: {}", p.display()))?
        }
    };

    let dataset_path = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| config.output.path.clone());

    // Build analyzer
    let mut builder = Analyzer::builder()
        .config(config)
        .rules(Box::new(BuiltinRules::new()));

    if let Some(root) = path {
        builder = builder.root(root);
    }

    for pattern in exclude {
        builder = builder.exclude(pattern);
    }

    let analyzer = builder.build().context("Failed to build analyzer")?;

    tracing::info!("Scanning {}", analyzer.root().display());

    let outcome = analyzer.scan().context("Scan failed")?;

    super::output::write(&outcome.records, &dataset_path, format)
        .with_context(|| format!("Failed to write dataset: {}", dataset_path.display()))?;

    super::output::print_summary(&outcome.summary, &dataset_path);

    Ok(())
}
