//! Layer classification: assigns each file its architectural role.
//!
//! Two evidence sources apply in strict priority order: framework-role
//! annotation markers in the content (highest confidence), then
//! path-substring vocabulary. Both are explicit decision lists — the first
//! matching entry determines the layer, so the decision order is
//! inspectable and independently testable.

use once_cell::sync::Lazy;
use regex::Regex;
use std::path::Path;

use crate::types::Layer;
use crate::util::pattern;

/// Annotation-marker rules, checked first, in this order.
static ANNOTATION_RULES: Lazy<Vec<(Regex, Layer)>> = Lazy::new(|| {
    vec![
        (pattern(r"@(RestController|Controller)"), Layer::Controller),
        (pattern(r"@Service"), Layer::Service),
        (pattern(r"@Repository"), Layer::Repository),
        (pattern(r"@Entity|@Table"), Layer::Entity),
    ]
});

/// Path-substring rules, the fallback, in this order.
static PATH_RULES: &[(&[&str], Layer)] = &[
    (&["controller", "web", "rest", "api"], Layer::Controller),
    (&["service", "business", "usecase"], Layer::Service),
    (&["repository", "dao", "jpa"], Layer::Repository),
    (&["entity", "model", "domain", "dto"], Layer::Entity),
    (&["adapter"], Layer::Adapter),
    (&["port"], Layer::Port),
];

/// Classifies one file's architectural layer.
///
/// Returns [`Layer::Other`] when neither evidence source matches; such files
/// are excluded from all downstream rule and label computation.
#[must_use]
pub fn classify(path: &Path, content: &str) -> Layer {
    for (marker, layer) in ANNOTATION_RULES.iter() {
        if marker.is_match(content) {
            return *layer;
        }
    }

    let path_lower = path.to_string_lossy().to_lowercase();
    for (substrings, layer) in PATH_RULES {
        if substrings.iter().any(|s| path_lower.contains(s)) {
            return *layer;
        }
    }

    Layer::Other
}
