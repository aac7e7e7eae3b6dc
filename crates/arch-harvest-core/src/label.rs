//! Training-label synthesis.

use crate::types::{Layer, Style, CLEAN_TAG};

/// Builds the context-specific training label for one file.
///
/// `{primary}_in_{style}_{layer}`, or `clean_{style}_{layer}` when the
/// primary violation is the clean sentinel. Identical inputs always produce
/// an identical string; this label is the artifact the downstream ML
/// trainer consumes.
#[must_use]
pub fn synthesize(primary: &str, style: Style, layer: Layer) -> String {
    if primary == CLEAN_TAG {
        format!("clean_{style}_{layer}")
    } else {
        format!("{primary}_in_{style}_{layer}")
    }
}
