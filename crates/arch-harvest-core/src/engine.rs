//! Generic violation-rule interpreter.
//!
//! Rules are plain data records evaluated in table order by one interpreter
//! shared across all styles, so rule order is an explicit, testable artifact
//! rather than implicit control flow. The concrete tables live in
//! `arch-harvest-rules` and reach the analyzer through the [`RuleSet`] trait.

use crate::types::{DependencyCounts, DirectionVerdict, Layer, Severity, Style, ViolationRecord};

/// Everything a rule predicate may look at for one file.
#[derive(Debug, Clone, Copy)]
pub struct RuleInput<'a> {
    /// The file's classified layer (never [`Layer::Other`]; such files are
    /// excluded before rule evaluation).
    pub layer: Layer,
    /// The owning repository's style.
    pub style: Style,
    /// Extracted per-target-layer dependency counts.
    pub deps: &'a DependencyCounts,
    /// The file's textual content.
    pub content: &'a str,
}

/// One violation rule: a predicate, the tag it appends, and the severity it
/// raises the running level to.
#[derive(Clone, Copy)]
pub struct RuleDef {
    /// Violation tag appended when the rule fires.
    pub tag: &'static str,
    /// Severity this rule raises the running level to (via `max`).
    pub severity: Severity,
    /// Whether the rule fires for the given input.
    pub fires: fn(&RuleInput<'_>) -> bool,
}

impl std::fmt::Debug for RuleDef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleDef")
            .field("tag", &self.tag)
            .field("severity", &self.severity)
            .finish_non_exhaustive()
    }
}

/// Source of the rule tables and the direction policy.
///
/// Implemented by `arch-harvest-rules`; the analyzer only depends on this
/// seam.
pub trait RuleSet: Send + Sync {
    /// Ordered style-specific rule table for `style`.
    fn style_rules(&self, style: Style) -> &[RuleDef];

    /// Ordered style-independent table evaluated after every style table.
    fn common_rules(&self) -> &[RuleDef];

    /// Classifies the correctness of the file's cross-layer dependency
    /// direction under `style`.
    fn direction(&self, layer: Layer, deps: &DependencyCounts, style: Style) -> DirectionVerdict;
}

/// Evaluates the style table, then the common table, in order.
///
/// The running severity starts at [`Severity::Low`] and is only ever raised
/// (`max`), never lowered, so it is monotonically non-decreasing across the
/// evaluation. An empty tag list normalizes to `["clean"]`.
#[must_use]
pub fn evaluate(rules: &dyn RuleSet, input: &RuleInput<'_>) -> ViolationRecord {
    let mut tags: Vec<&'static str> = Vec::new();
    let mut severity = Severity::Low;

    for rule in rules
        .style_rules(input.style)
        .iter()
        .chain(rules.common_rules())
    {
        if (rule.fires)(input) {
            tags.push(rule.tag);
            severity = severity.max(rule.severity);
        }
    }

    if tags.is_empty() {
        return ViolationRecord::clean();
    }

    ViolationRecord { tags, severity }
}
