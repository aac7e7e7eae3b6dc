//! Dependency-direction analysis.
//!
//! Checks a file's extracted dependency buckets against the adjacency its
//! repository's style expects. Independent of the violation tables; any
//! (layer, style) combination without a covering rule yields
//! [`DirectionVerdict::Unknown`], a legitimate terminal outcome.

use arch_harvest_core::{DependencyCounts, DirectionVerdict, Layer, Style};

/// Classifies the correctness of one file's cross-layer dependency
/// direction.
#[must_use]
pub fn analyze(layer: Layer, deps: &DependencyCounts, style: Style) -> DirectionVerdict {
    match style {
        Style::Layered | Style::Mvc => layered(layer, deps),
        Style::Hexagonal => hexagonal(layer, deps),
        Style::CleanArchitecture => clean(layer, deps),
    }
}

/// Expected flow: controller → service → repository → entity.
fn layered(layer: Layer, deps: &DependencyCounts) -> DirectionVerdict {
    match layer {
        Layer::Controller => {
            if deps.repository > 0 || deps.entity > 0 {
                DirectionVerdict::SkipLayer
            } else if deps.service > 0 {
                DirectionVerdict::Correct
            } else {
                DirectionVerdict::Unknown
            }
        }
        Layer::Service => {
            if deps.controller > 0 {
                DirectionVerdict::Reversed
            } else {
                DirectionVerdict::Correct
            }
        }
        Layer::Repository => {
            if deps.service > 0 || deps.controller > 0 {
                DirectionVerdict::Reversed
            } else {
                DirectionVerdict::Correct
            }
        }
        _ => DirectionVerdict::Unknown,
    }
}

/// Expected flow: adapter → port ← domain; the domain never sees adapters.
fn hexagonal(layer: Layer, deps: &DependencyCounts) -> DirectionVerdict {
    match layer {
        Layer::Adapter => {
            if deps.port > 0 {
                DirectionVerdict::Correct
            } else {
                DirectionVerdict::MissingPort
            }
        }
        Layer::Service => {
            if deps.adapter > 0 {
                DirectionVerdict::Reversed
            } else if deps.port > 0 {
                DirectionVerdict::Correct
            } else {
                DirectionVerdict::Unknown
            }
        }
        _ => DirectionVerdict::Unknown,
    }
}

/// Expected flow: outer rings depend inward only; use cases never see
/// controllers.
fn clean(layer: Layer, deps: &DependencyCounts) -> DirectionVerdict {
    match layer {
        Layer::Controller => {
            if deps.usecase > 0 || deps.gateway > 0 {
                DirectionVerdict::Correct
            } else if deps.entity > 0 || deps.repository > 0 {
                DirectionVerdict::DependencyRuleViolation
            } else {
                DirectionVerdict::Unknown
            }
        }
        Layer::Service => {
            if deps.controller > 0 {
                DirectionVerdict::Reversed
            } else if deps.gateway > 0 || deps.entity > 0 {
                DirectionVerdict::Correct
            } else {
                DirectionVerdict::Unknown
            }
        }
        _ => DirectionVerdict::Unknown,
    }
}
