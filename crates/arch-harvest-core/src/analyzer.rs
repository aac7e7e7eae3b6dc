//! Scan orchestration: repositories in, dataset records out.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::engine::{self, RuleInput, RuleSet};
use crate::types::{round2, FileRecord, Layer, StyleVerdict};
use crate::{characteristics, deps, label, layer, metrics, style};

/// Errors that can occur during a scan.
#[derive(Debug, Error)]
pub enum AnalyzerError {
    /// IO error reading the repositories root.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Glob pattern error during file discovery.
    #[error("Invalid glob pattern: {0}")]
    Glob(#[from] glob::PatternError),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// The builder was given no rule set.
    #[error("no rule set registered")]
    NoRuleSet,
}

/// Builder for configuring an [`Analyzer`].
#[derive(Default)]
pub struct AnalyzerBuilder {
    root: Option<PathBuf>,
    config: Option<Config>,
    rules: Option<Box<dyn RuleSet>>,
    exclude_patterns: Vec<String>,
}

impl AnalyzerBuilder {
    /// Creates a new builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the repositories root (overrides the configured one).
    #[must_use]
    pub fn root(mut self, path: impl Into<PathBuf>) -> Self {
        self.root = Some(path.into());
        self
    }

    /// Sets the configuration.
    #[must_use]
    pub fn config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Sets the rule set providing violation tables and direction policy.
    #[must_use]
    pub fn rules(mut self, rules: Box<dyn RuleSet>) -> Self {
        self.rules = Some(rules);
        self
    }

    /// Adds an exclude glob pattern.
    #[must_use]
    pub fn exclude(mut self, pattern: impl Into<String>) -> Self {
        self.exclude_patterns.push(pattern.into());
        self
    }

    /// Builds the analyzer.
    ///
    /// # Errors
    ///
    /// Returns [`AnalyzerError::NoRuleSet`] if no rule set was registered.
    pub fn build(self) -> Result<Analyzer, AnalyzerError> {
        let config = self.config.unwrap_or_default();
        let root = self.root.unwrap_or_else(|| config.scan.root.clone());
        let rules = self.rules.ok_or(AnalyzerError::NoRuleSet)?;

        let mut exclude_patterns = self.exclude_patterns;
        exclude_patterns.extend(config.scan.exclude.clone());

        Ok(Analyzer {
            root,
            config,
            rules,
            exclude_patterns,
        })
    }
}

/// Result of one scan: the materialized dataset plus its distributions.
#[derive(Debug)]
pub struct ScanOutcome {
    /// One record per accepted file, in deterministic order.
    pub records: Vec<FileRecord>,
    /// Counts for console statistics reporting.
    pub summary: ScanSummary,
}

/// Distribution counts accumulated during a scan.
#[derive(Debug, Default, Clone, Serialize)]
pub struct ScanSummary {
    /// Repositories visited.
    pub repositories: usize,
    /// Candidate source files seen (before layer rejection).
    pub files_seen: usize,
    /// Records produced.
    pub records: usize,
    /// Repository count per style.
    pub styles: BTreeMap<String, usize>,
    /// Record count per layer.
    pub layers: BTreeMap<String, usize>,
    /// Record count per primary anti-pattern.
    pub anti_patterns: BTreeMap<String, usize>,
    /// Record count per training label.
    pub labels: BTreeMap<String, usize>,
    /// Record count per severity.
    pub severities: BTreeMap<String, usize>,
}

impl ScanSummary {
    fn note_repository(&mut self, verdict: StyleVerdict) {
        self.repositories += 1;
        *self.styles.entry(verdict.style.to_string()).or_insert(0) += 1;
    }

    fn note_record(&mut self, record: &FileRecord) {
        self.records += 1;
        *self.layers.entry(record.layer.to_string()).or_insert(0) += 1;
        *self
            .anti_patterns
            .entry(record.anti_pattern.clone())
            .or_insert(0) += 1;
        *self
            .labels
            .entry(record.context_specific_label.clone())
            .or_insert(0) += 1;
        *self
            .severities
            .entry(record.severity.to_string())
            .or_insert(0) += 1;
    }
}

/// The scan orchestrator.
///
/// Use [`Analyzer::builder()`] to construct an instance. Per-repository
/// style is computed once and applied to every file; each file is then
/// classified independently — per-file work shares no mutable state, so a
/// failure on one file never aborts the batch.
pub struct Analyzer {
    root: PathBuf,
    config: Config,
    rules: Box<dyn RuleSet>,
    exclude_patterns: Vec<String>,
}

impl Analyzer {
    /// Creates a new builder.
    #[must_use]
    pub fn builder() -> AnalyzerBuilder {
        AnalyzerBuilder::new()
    }

    /// Returns the repositories root.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Scans every repository under the root and returns the dataset.
    ///
    /// # Errors
    ///
    /// Returns an error if the root cannot be enumerated or a discovery
    /// pattern is invalid. Per-file failures are recovered locally and never
    /// abort the scan.
    pub fn scan(&self) -> Result<ScanOutcome, AnalyzerError> {
        info!("Scanning repositories under {}", self.root.display());

        let mut records = Vec::new();
        let mut summary = ScanSummary::default();

        for (repo_name, repo_path) in self.discover_repositories()? {
            let verdict = style::classify_repository(&repo_path, &self.config.scan);
            summary.note_repository(verdict);
            debug!(
                "{}: style={} confidence={:.2}",
                repo_name, verdict.style, verdict.confidence
            );

            for file in self.discover_files(&repo_path)? {
                summary.files_seen += 1;
                if let Some(record) = self.analyze_file(&file, &repo_name, verdict) {
                    records.push(record);
                }
            }
        }

        for record in &records {
            summary.note_record(record);
        }

        info!(
            "Scan complete: {} records from {} files across {} repositories",
            summary.records,
            summary.files_seen,
            summary.repositories
        );

        Ok(ScanOutcome { records, summary })
    }

    /// Classifies one file; `None` excludes it from the dataset.
    fn analyze_file(
        &self,
        path: &Path,
        repo_name: &str,
        verdict: StyleVerdict,
    ) -> Option<FileRecord> {
        let content = match read_bounded(path, self.config.scan.max_file_bytes) {
            Ok(content) => content,
            Err(e) => {
                warn!("skipping unreadable file {}: {}", path.display(), e);
                return None;
            }
        };

        if content.len() < self.config.scan.min_file_bytes {
            return None;
        }

        let file_layer = layer::classify(path, &content);
        if file_layer == Layer::Other {
            return None;
        }

        let dependency_counts = deps::extract(&content);
        let code_metrics = metrics::extract(&content);
        let flags = characteristics::analyze(&content);

        let direction = self
            .rules
            .direction(file_layer, &dependency_counts, verdict.style);

        let input = RuleInput {
            layer: file_layer,
            style: verdict.style,
            deps: &dependency_counts,
            content: &content,
        };
        let violations = engine::evaluate(self.rules.as_ref(), &input);
        let primary = violations.primary();

        Some(FileRecord {
            file: path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default(),
            repo: repo_name.to_string(),
            layer: file_layer,
            architecture_pattern: verdict.style,
            architecture_confidence: round2(verdict.confidence),
            loc: code_metrics.loc,
            methods: code_metrics.methods,
            classes: code_metrics.classes,
            avg_cc: round2(code_metrics.avg_cc),
            imports: code_metrics.imports,
            annotations: code_metrics.annotations,
            controller_deps: dependency_counts.controller,
            service_deps: dependency_counts.service,
            repository_deps: dependency_counts.repository,
            entity_deps: dependency_counts.entity,
            adapter_deps: dependency_counts.adapter,
            port_deps: dependency_counts.port,
            usecase_deps: dependency_counts.usecase,
            gateway_deps: dependency_counts.gateway,
            total_cross_layer_deps: dependency_counts.total(),
            has_business_logic: flags.has_business_logic,
            has_data_access: flags.has_data_access,
            has_http_handling: flags.has_http_handling,
            has_validation: flags.has_validation,
            has_transaction: flags.has_transaction,
            dependency_direction: direction,
            violates_layer_separation: direction.violates_layer_separation(),
            anti_pattern: primary.to_string(),
            all_violations: violations.joined(),
            severity: violations.severity,
            context_specific_label: label::synthesize(primary, verdict.style, file_layer),
        })
    }

    /// Immediate subdirectories of the root, sorted by name for
    /// deterministic output order.
    fn discover_repositories(&self) -> Result<Vec<(String, PathBuf)>, AnalyzerError> {
        let mut repos = Vec::new();

        for entry in std::fs::read_dir(&self.root)? {
            let entry = entry?;
            if entry.file_type()?.is_dir() {
                let name = entry.file_name().to_string_lossy().into_owned();
                repos.push((name, entry.path()));
            }
        }

        repos.sort_by(|a, b| a.0.cmp(&b.0));
        Ok(repos)
    }

    /// Recognized source files under one repository, sorted for determinism.
    fn discover_files(&self, repo_path: &Path) -> Result<Vec<PathBuf>, AnalyzerError> {
        let mut files = Vec::new();

        for ext in &self.config.scan.extensions {
            let pattern = format!("{}/**/*.{}", repo_path.display(), ext);
            for entry in glob::glob(&pattern)? {
                let path = entry.map_err(|e| AnalyzerError::Io(e.into_error()))?;

                if self.should_exclude(&path) {
                    debug!("Excluding: {}", path.display());
                    continue;
                }

                files.push(path);
            }
        }

        files.sort();
        Ok(files)
    }

    /// Checks if a path should be excluded.
    fn should_exclude(&self, path: &Path) -> bool {
        let path_str = path.to_string_lossy();

        for pattern in &self.exclude_patterns {
            if let Ok(glob_pattern) = glob::Pattern::new(pattern) {
                if glob_pattern.matches(&path_str) {
                    return true;
                }
            }

            // Also check as substring for patterns like "**/target/**"
            let normalized_pattern = pattern.replace("**", "");
            if !normalized_pattern.is_empty() && path_str.contains(&normalized_pattern) {
                return true;
            }
        }

        false
    }
}

/// Reads at most `limit` bytes of a file, lossily decoded.
fn read_bounded(path: &Path, limit: usize) -> std::io::Result<String> {
    let bytes = std::fs::read(path)?;
    let end = bytes.len().min(limit);
    Ok(String::from_utf8_lossy(&bytes[..end]).into_owned())
}
