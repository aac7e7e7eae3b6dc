//! Violation rules for the layered/mvc family.
//!
//! Both styles share one table: mvc is the most common concrete layered
//! variant and obeys the same controller → service → repository flow.

use arch_harvest_core::{Layer, RuleDef, RuleInput, Severity};

use crate::patterns;

fn controller_skips_to_repository(input: &RuleInput<'_>) -> bool {
    input.layer == Layer::Controller && input.deps.repository > 0
}

fn service_depends_on_controller(input: &RuleInput<'_>) -> bool {
    input.layer == Layer::Service && input.deps.controller > 0
}

fn business_logic_in_controller(input: &RuleInput<'_>) -> bool {
    input.layer == Layer::Controller
        && patterns::BUSINESS_LOGIC_IN_CONTROLLER
            .iter()
            .any(|re| re.is_match(input.content))
}

fn mutating_service_without_transaction(input: &RuleInput<'_>) -> bool {
    input.layer == Layer::Service
        && patterns::MUTATING_CALL.is_match(input.content)
        && !patterns::TRANSACTIONAL.is_match(input.content)
}

/// Ordered rule table for layered and mvc repositories.
pub static RULES: &[RuleDef] = &[
    RuleDef {
        tag: "layer_skip_in_layered",
        severity: Severity::High,
        fires: controller_skips_to_repository,
    },
    RuleDef {
        tag: "reversed_dependency_in_layered",
        severity: Severity::High,
        fires: service_depends_on_controller,
    },
    RuleDef {
        tag: "business_logic_in_controller_layered",
        severity: Severity::Medium,
        fires: business_logic_in_controller,
    },
    RuleDef {
        tag: "missing_transaction_in_layered",
        severity: Severity::High,
        fires: mutating_service_without_transaction,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use arch_harvest_core::{DependencyCounts, Style};

    fn input<'a>(layer: Layer, deps: &'a DependencyCounts, content: &'a str) -> RuleInput<'a> {
        RuleInput {
            layer,
            style: Style::Layered,
            deps,
            content,
        }
    }

    #[test]
    fn table_order_is_stable() {
        let tags: Vec<&str> = RULES.iter().map(|r| r.tag).collect();
        assert_eq!(
            tags,
            vec![
                "layer_skip_in_layered",
                "reversed_dependency_in_layered",
                "business_logic_in_controller_layered",
                "missing_transaction_in_layered",
            ]
        );
    }

    #[test]
    fn controller_with_repository_dep_skips_a_layer() {
        let deps = DependencyCounts {
            repository: 1,
            ..DependencyCounts::default()
        };
        assert!((RULES[0].fires)(&input(Layer::Controller, &deps, "")));
        assert!(!(RULES[0].fires)(&input(Layer::Service, &deps, "")));
        assert_eq!(RULES[0].severity, Severity::High);
    }

    #[test]
    fn service_with_controller_dep_is_reversed() {
        let deps = DependencyCounts {
            controller: 2,
            ..DependencyCounts::default()
        };
        assert!((RULES[1].fires)(&input(Layer::Service, &deps, "")));
        assert!(!(RULES[1].fires)(&input(
            Layer::Service,
            &DependencyCounts::default(),
            ""
        )));
    }

    #[test]
    fn conditional_mutation_in_controller_fires() {
        let deps = DependencyCounts::default();
        let content = "if (order.isNew()) { repository.save(order); }";
        assert!((RULES[2].fires)(&input(Layer::Controller, &deps, content)));
        // The same content in a service is not this rule's concern.
        assert!(!(RULES[2].fires)(&input(Layer::Service, &deps, content)));
    }

    #[test]
    fn mutating_service_needs_a_transaction_marker() {
        let deps = DependencyCounts::default();
        let bare = "public void close() { repository.delete(order); }";
        let marked = "@Transactional\npublic void close() { repository.delete(order); }";
        assert!((RULES[3].fires)(&input(Layer::Service, &deps, bare)));
        assert!(!(RULES[3].fires)(&input(Layer::Service, &deps, marked)));
    }
}
