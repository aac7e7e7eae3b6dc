//! Size and complexity metrics.
//!
//! Everything here is heuristic line/pattern counting — no syntax tree is
//! ever built. Extraction cannot fail: content that decomposes into zero
//! method units simply gets the documented defaults (counts 0, average
//! complexity 1.0).

use once_cell::sync::Lazy;
use regex::Regex;

use crate::types::CodeMetrics;
use crate::util::pattern;

/// Method-shaped declaration: visibility modifier, optional extra modifiers,
/// a return type, a name, and a parameter list. Constructors carry no return
/// type and are intentionally not counted.
static METHOD_DECL: Lazy<Regex> = Lazy::new(|| {
    pattern(
        r"(?m)^\s*(?:public|protected|private)\s+(?:(?:static|final|abstract|synchronized)\s+)*[\w<>\[\], ?]+\s+\w+\s*\([^)]*\)",
    )
});

static TYPE_DECL: Lazy<Regex> = Lazy::new(|| {
    pattern(r"(?m)^\s*(?:(?:public|protected|private|abstract|final|static)\s+)*(?:class|interface|enum)\s+\w+")
});

/// Branch points that contribute to cyclomatic complexity.
static DECISION_POINT: Lazy<Regex> =
    Lazy::new(|| pattern(r"\b(?:if|for|while|case|catch)\b|&&|\|\|"));

static IMPORT_LINE: Lazy<Regex> = Lazy::new(|| pattern(r"(?m)^import\s"));

static ANNOTATION_MARKER: Lazy<Regex> = Lazy::new(|| pattern(r"@[A-Za-z]"));

/// Extracts size/complexity metrics from one file's content.
///
/// Average cyclomatic complexity is the sum of per-unit complexity (one plus
/// the unit's decision points) divided by the unit count; with no detectable
/// units it defaults to 1.0.
#[must_use]
pub fn extract(content: &str) -> CodeMetrics {
    let methods = METHOD_DECL.find_iter(content).count();
    let decision_points = DECISION_POINT.find_iter(content).count();

    let avg_cc = if methods == 0 {
        1.0
    } else {
        // Each unit contributes a base complexity of 1; decision points are
        // attributed to the units that contain them, so the sum over units
        // is methods + decision_points.
        (methods + decision_points) as f64 / methods as f64
    };

    CodeMetrics {
        loc: content.lines().count(),
        methods,
        classes: TYPE_DECL.find_iter(content).count(),
        avg_cc,
        imports: IMPORT_LINE.find_iter(content).count(),
        annotations: ANNOTATION_MARKER.find_iter(content).count(),
    }
}
