//! Style-independent rules, evaluated after every style table.
//!
//! Their severities act as floors: the interpreter's `max` semantics raise
//! a clean file to at least Medium without ever lowering a harsher verdict.

use arch_harvest_core::{Layer, RuleDef, RuleInput, Severity};

use crate::patterns;

fn broad_catch(input: &RuleInput<'_>) -> bool {
    patterns::BROAD_CATCH.is_match(input.content)
}

fn unvalidated_request_body(input: &RuleInput<'_>) -> bool {
    input.layer == Layer::Controller
        && patterns::MUTATING_ENDPOINT_WITH_BODY.is_match(input.content)
        && !patterns::VALIDATION_MARKER.is_match(input.content)
}

fn direct_construction(input: &RuleInput<'_>) -> bool {
    patterns::DIRECT_CONSTRUCTION.is_match(input.content)
}

/// Ordered style-independent rule table.
pub static RULES: &[RuleDef] = &[
    RuleDef {
        tag: "broad_catch",
        severity: Severity::Medium,
        fires: broad_catch,
    },
    RuleDef {
        tag: "no_validation",
        severity: Severity::Medium,
        fires: unvalidated_request_body,
    },
    RuleDef {
        tag: "tight_coupling_new_keyword",
        severity: Severity::Medium,
        fires: direct_construction,
    },
];
