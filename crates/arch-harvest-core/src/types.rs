//! Core types for architecture classification and the output dataset.

use serde::{Deserialize, Serialize};

/// Tag used when no violation rule fired for a file.
pub const CLEAN_TAG: &str = "clean";

/// Architecture-pattern family inferred once per repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Style {
    /// Classic layered architecture (controller/service/repository/entity).
    Layered,
    /// Hexagonal (ports and adapters) architecture.
    Hexagonal,
    /// Clean architecture (use cases, gateways, presenters).
    CleanArchitecture,
    /// Model-view-controller, the most common concrete layered variant.
    Mvc,
}

impl Style {
    /// All styles in deterministic arg-max order.
    ///
    /// When two styles accumulate equal evidence, the one listed first here
    /// wins, so classification is stable run-to-run.
    pub const ALL: [Style; 4] = [
        Style::Layered,
        Style::Hexagonal,
        Style::CleanArchitecture,
        Style::Mvc,
    ];

    /// Returns the snake_case name used in labels and dataset columns.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Layered => "layered",
            Self::Hexagonal => "hexagonal",
            Self::CleanArchitecture => "clean_architecture",
            Self::Mvc => "mvc",
        }
    }

    /// Returns true for the layered family (layered or mvc), which shares
    /// one violation rule table.
    #[must_use]
    pub fn is_layered_family(self) -> bool {
        matches!(self, Self::Layered | Self::Mvc)
    }
}

impl std::fmt::Display for Style {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Architectural role of a single file within its repository's style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layer {
    /// HTTP/web entry point.
    Controller,
    /// Business logic (also the use-case layer under clean architecture and
    /// the domain layer under hexagonal).
    Service,
    /// Persistence access.
    Repository,
    /// Domain model / persistence entity.
    Entity,
    /// Hexagonal adapter.
    Adapter,
    /// Hexagonal port.
    Port,
    /// Reject sentinel: the file matched no layer evidence and is excluded
    /// from all downstream rule and label computation.
    Other,
}

impl Layer {
    /// Returns the lowercase name used in labels and dataset columns.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Controller => "controller",
            Self::Service => "service",
            Self::Repository => "repository",
            Self::Entity => "entity",
            Self::Adapter => "adapter",
            Self::Port => "port",
            Self::Other => "other",
        }
    }
}

impl std::fmt::Display for Layer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Risk level assigned per file, raised (never lowered) during rule
/// evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Default when no rule fired.
    Low,
    /// Hygiene-level finding.
    Medium,
    /// Architecture rule breach.
    High,
    /// Violation of the style's central constraint.
    Critical,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => f.write_str("low"),
            Self::Medium => f.write_str("medium"),
            Self::High => f.write_str("high"),
            Self::Critical => f.write_str("critical"),
        }
    }
}

/// Accumulated weighted evidence per style for one repository.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IndicatorScores {
    weights: [u32; Style::ALL.len()],
}

impl IndicatorScores {
    /// Creates an empty score table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `weight` to the accumulated score for `style`.
    pub fn add(&mut self, style: Style, weight: u32) {
        self.weights[Self::index(style)] += weight;
    }

    /// Returns the accumulated weight for `style`.
    #[must_use]
    pub fn get(&self, style: Style) -> u32 {
        self.weights[Self::index(style)]
    }

    /// Total accumulated weight across all styles.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.weights.iter().sum()
    }

    /// The style with maximal weight; ties resolve to the first entry in
    /// [`Style::ALL`].
    #[must_use]
    pub fn arg_max(&self) -> Style {
        let mut best = Style::ALL[0];
        for style in Style::ALL {
            if self.get(style) > self.get(best) {
                best = style;
            }
        }
        best
    }

    fn index(style: Style) -> usize {
        match style {
            Style::Layered => 0,
            Style::Hexagonal => 1,
            Style::CleanArchitecture => 2,
            Style::Mvc => 3,
        }
    }
}

/// Repository-level classification result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StyleVerdict {
    /// Inferred architecture pattern.
    pub style: Style,
    /// Share of total evidence carried by the winning style, in `[0, 1]`.
    pub confidence: f64,
}

/// Per-target-layer dependency counters for one file.
///
/// Always fully populated; unseen targets stay zero. A single captured type
/// name may increment several buckets when it contains several layer
/// keywords — this over-counting is intentional and must not be corrected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyCounts {
    /// Dependencies on controller-named collaborators.
    pub controller: u32,
    /// Dependencies on service-named collaborators.
    pub service: u32,
    /// Dependencies on repository/DAO-named collaborators.
    pub repository: u32,
    /// Dependencies on entity-named collaborators (never incremented by
    /// extraction; present for schema stability).
    pub entity: u32,
    /// Dependencies on adapter-named collaborators.
    pub adapter: u32,
    /// Dependencies on port-named collaborators.
    pub port: u32,
    /// Dependencies on use-case-named collaborators.
    pub usecase: u32,
    /// Dependencies on gateway-named collaborators.
    pub gateway: u32,
}

impl DependencyCounts {
    /// Sum over all buckets.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.controller
            + self.service
            + self.repository
            + self.entity
            + self.adapter
            + self.port
            + self.usecase
            + self.gateway
    }
}

/// Size and complexity metrics for one file.
///
/// Extraction never fails: when the content cannot be decomposed into
/// countable units, counts default to 0 and `avg_cc` to 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CodeMetrics {
    /// Total line count.
    pub loc: usize,
    /// Method-shaped declarations found.
    pub methods: usize,
    /// Class/interface/enum declarations found.
    pub classes: usize,
    /// Average cyclomatic complexity per method unit.
    pub avg_cc: f64,
    /// Import statements.
    pub imports: usize,
    /// Annotation-marker occurrences.
    pub annotations: usize,
}

impl Default for CodeMetrics {
    fn default() -> Self {
        Self {
            loc: 0,
            methods: 0,
            classes: 0,
            avg_cc: 1.0,
            imports: 0,
            annotations: 0,
        }
    }
}

/// Boolean code-characteristic flags for one file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeCharacteristics {
    /// Control flow or stream processing present.
    pub has_business_logic: bool,
    /// Persistence calls or persistence-framework markers present.
    pub has_data_access: bool,
    /// HTTP mapping annotations or servlet types present.
    pub has_http_handling: bool,
    /// Validation markers present.
    pub has_validation: bool,
    /// Transactional marker present.
    pub has_transaction: bool,
}

/// Verdict on whether a file's cross-layer dependencies follow the flow its
/// repository's style expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DirectionVerdict {
    /// Dependencies follow the expected flow.
    Correct,
    /// A layer was bypassed (e.g. controller straight to repository).
    SkipLayer,
    /// Dependency points against the expected flow.
    Reversed,
    /// An adapter carries no port dependency.
    MissingPort,
    /// Clean architecture's dependency rule is broken.
    DependencyRuleViolation,
    /// No adjacency rule covers this (layer, style) combination; a
    /// legitimate terminal outcome, not an error.
    Unknown,
}

impl DirectionVerdict {
    /// Returns the snake_case name used in dataset columns.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Correct => "correct",
            Self::SkipLayer => "skip_layer",
            Self::Reversed => "reversed",
            Self::MissingPort => "missing_port",
            Self::DependencyRuleViolation => "dependency_rule_violation",
            Self::Unknown => "unknown",
        }
    }

    /// True iff this verdict represents a breach of layer separation.
    #[must_use]
    pub fn violates_layer_separation(self) -> bool {
        matches!(
            self,
            Self::SkipLayer | Self::Reversed | Self::DependencyRuleViolation | Self::MissingPort
        )
    }
}

impl std::fmt::Display for DirectionVerdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered violation tags plus the final severity for one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViolationRecord {
    /// Violation tags in rule-evaluation order; `["clean"]` when none fired.
    pub tags: Vec<&'static str>,
    /// Final severity after monotonic raising; `Low` when nothing fired.
    pub severity: Severity,
}

impl ViolationRecord {
    /// The record for a file with no findings.
    #[must_use]
    pub fn clean() -> Self {
        Self {
            tags: vec![CLEAN_TAG],
            severity: Severity::Low,
        }
    }

    /// First tag, or `"clean"` for an empty record.
    #[must_use]
    pub fn primary(&self) -> &'static str {
        self.tags.first().copied().unwrap_or(CLEAN_TAG)
    }

    /// Pipe-joined tag list for the dataset column.
    #[must_use]
    pub fn joined(&self) -> String {
        self.tags.join("|")
    }
}

/// One output row of the dataset.
///
/// Field order is the dataset column order and must stay stable run-to-run:
/// the downstream ML-training consumer depends on this schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileRecord {
    /// File name (without directories).
    pub file: String,
    /// Owning repository name (the directory whose style verdict applied).
    pub repo: String,
    /// Classified architectural layer.
    pub layer: Layer,
    /// Repository-level architecture pattern.
    pub architecture_pattern: Style,
    /// Style confidence, rounded to two decimals.
    pub architecture_confidence: f64,
    /// Total line count.
    pub loc: usize,
    /// Method-shaped declarations.
    pub methods: usize,
    /// Class/interface/enum declarations.
    pub classes: usize,
    /// Average cyclomatic complexity, rounded to two decimals.
    pub avg_cc: f64,
    /// Import statements.
    pub imports: usize,
    /// Annotation-marker occurrences.
    pub annotations: usize,
    /// Dependencies on controller-named collaborators.
    pub controller_deps: u32,
    /// Dependencies on service-named collaborators.
    pub service_deps: u32,
    /// Dependencies on repository/DAO-named collaborators.
    pub repository_deps: u32,
    /// Dependencies on entity-named collaborators.
    pub entity_deps: u32,
    /// Dependencies on adapter-named collaborators.
    pub adapter_deps: u32,
    /// Dependencies on port-named collaborators.
    pub port_deps: u32,
    /// Dependencies on use-case-named collaborators.
    pub usecase_deps: u32,
    /// Dependencies on gateway-named collaborators.
    pub gateway_deps: u32,
    /// Sum over all dependency buckets.
    pub total_cross_layer_deps: u32,
    /// Control flow or stream processing present.
    pub has_business_logic: bool,
    /// Persistence calls or persistence-framework markers present.
    pub has_data_access: bool,
    /// HTTP mapping annotations or servlet types present.
    pub has_http_handling: bool,
    /// Validation markers present.
    pub has_validation: bool,
    /// Transactional marker present.
    pub has_transaction: bool,
    /// Cross-layer dependency direction verdict.
    pub dependency_direction: DirectionVerdict,
    /// True iff the direction verdict breaches layer separation.
    pub violates_layer_separation: bool,
    /// Primary violation tag, or `clean`.
    pub anti_pattern: String,
    /// Pipe-joined list of all violation tags.
    pub all_violations: String,
    /// Final severity.
    pub severity: Severity,
    /// Synthesized training label.
    pub context_specific_label: String,
}

/// Rounds to two decimal places, matching the dataset's fixed precision.
#[must_use]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    // --- Severity tests ---

    #[test]
    fn severity_is_ordered() {
        assert!(Severity::Low < Severity::Medium);
        assert!(Severity::Medium < Severity::High);
        assert!(Severity::High < Severity::Critical);
    }

    #[test]
    fn severity_max_never_lowers() {
        let running = Severity::Critical;
        assert_eq!(running.max(Severity::Medium), Severity::Critical);
    }

    // --- IndicatorScores tests ---

    #[test]
    fn arg_max_picks_heaviest_style() {
        let mut scores = IndicatorScores::new();
        scores.add(Style::Hexagonal, 6);
        scores.add(Style::Layered, 2);
        assert_eq!(scores.arg_max(), Style::Hexagonal);
        assert_eq!(scores.total(), 8);
    }

    #[test]
    fn arg_max_ties_resolve_in_declaration_order() {
        let mut scores = IndicatorScores::new();
        scores.add(Style::Mvc, 3);
        scores.add(Style::Layered, 3);
        // Layered precedes Mvc in Style::ALL.
        assert_eq!(scores.arg_max(), Style::Layered);
    }

    #[test]
    fn empty_scores_arg_max_is_first_style() {
        assert_eq!(IndicatorScores::new().arg_max(), Style::Layered);
    }

    // --- DirectionVerdict tests ---

    #[test]
    fn separation_breaches_are_flagged() {
        assert!(DirectionVerdict::SkipLayer.violates_layer_separation());
        assert!(DirectionVerdict::Reversed.violates_layer_separation());
        assert!(DirectionVerdict::MissingPort.violates_layer_separation());
        assert!(DirectionVerdict::DependencyRuleViolation.violates_layer_separation());
        assert!(!DirectionVerdict::Correct.violates_layer_separation());
        assert!(!DirectionVerdict::Unknown.violates_layer_separation());
    }

    // --- ViolationRecord tests ---

    #[test]
    fn clean_record_has_sentinel_tag() {
        let record = ViolationRecord::clean();
        assert_eq!(record.tags, vec![CLEAN_TAG]);
        assert_eq!(record.primary(), CLEAN_TAG);
        assert_eq!(record.severity, Severity::Low);
    }

    #[test]
    fn primary_is_first_tag() {
        let record = ViolationRecord {
            tags: vec!["layer_skip_in_layered", "broad_catch"],
            severity: Severity::High,
        };
        assert_eq!(record.primary(), "layer_skip_in_layered");
        assert_eq!(record.joined(), "layer_skip_in_layered|broad_catch");
    }

    // --- Display tests ---

    #[test]
    fn display_forms_match_dataset_vocabulary() {
        assert_eq!(Style::CleanArchitecture.to_string(), "clean_architecture");
        assert_eq!(Layer::Repository.to_string(), "repository");
        assert_eq!(Severity::Critical.to_string(), "critical");
        assert_eq!(
            DirectionVerdict::DependencyRuleViolation.to_string(),
            "dependency_rule_violation"
        );
    }

    #[test]
    fn round2_truncates_to_cents() {
        assert!((round2(0.666_666) - 0.67).abs() < f64::EPSILON);
        assert!((round2(1.0) - 1.0).abs() < f64::EPSILON);
    }
}
