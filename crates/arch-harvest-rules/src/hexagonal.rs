//! Violation rules for hexagonal (ports and adapters) repositories.

use arch_harvest_core::{Layer, RuleDef, RuleInput, Severity};

use crate::patterns;

fn domain_bypasses_ports(input: &RuleInput<'_>) -> bool {
    input.layer == Layer::Service && input.deps.repository > 0 && input.deps.port == 0
}

fn domain_imports_framework(input: &RuleInput<'_>) -> bool {
    input.layer == Layer::Service && patterns::FRAMEWORK_IMPORT.is_match(input.content)
}

fn adapter_without_port(input: &RuleInput<'_>) -> bool {
    input.layer == Layer::Adapter && !patterns::IMPLEMENTS_PORT.is_match(input.content)
}

/// Ordered rule table for hexagonal repositories.
pub static RULES: &[RuleDef] = &[
    RuleDef {
        tag: "missing_port_adapter_in_hexagonal",
        severity: Severity::Critical,
        fires: domain_bypasses_ports,
    },
    RuleDef {
        tag: "framework_dependency_in_domain_hexagonal",
        severity: Severity::Critical,
        fires: domain_imports_framework,
    },
    RuleDef {
        tag: "adapter_without_port_hexagonal",
        severity: Severity::Medium,
        fires: adapter_without_port,
    },
];
