//! Violation rules for clean-architecture repositories.
//!
//! Under clean architecture the service layer plays the use-case role and
//! the controller sits in the outermost ring; dependencies must point
//! inward only.

use arch_harvest_core::{Layer, RuleDef, RuleInput, Severity};

use crate::patterns;

fn outer_depends_on_inner(input: &RuleInput<'_>) -> bool {
    input.layer == Layer::Controller && (input.deps.entity > 0 || input.deps.repository > 0)
}

fn usecase_carries_framework_markers(input: &RuleInput<'_>) -> bool {
    input.layer == Layer::Service && patterns::FRAMEWORK_ROLE_MARKER.is_match(input.content)
}

fn entity_carries_persistence_markers(input: &RuleInput<'_>) -> bool {
    input.layer == Layer::Entity && patterns::PERSISTENCE_MARKER.is_match(input.content)
}

fn usecase_bypasses_gateway(input: &RuleInput<'_>) -> bool {
    input.layer == Layer::Service && input.deps.repository > 0 && input.deps.gateway == 0
}

/// Ordered rule table for clean-architecture repositories.
pub static RULES: &[RuleDef] = &[
    RuleDef {
        tag: "outer_depends_on_inner_clean",
        severity: Severity::Critical,
        fires: outer_depends_on_inner,
    },
    RuleDef {
        tag: "usecase_framework_coupling_clean",
        severity: Severity::Critical,
        fires: usecase_carries_framework_markers,
    },
    RuleDef {
        tag: "entity_framework_coupling_clean",
        severity: Severity::Medium,
        fires: entity_carries_persistence_markers,
    },
    RuleDef {
        tag: "missing_gateway_interface_clean",
        severity: Severity::High,
        fires: usecase_bypasses_gateway,
    },
];
