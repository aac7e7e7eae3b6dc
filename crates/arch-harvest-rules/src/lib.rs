//! # arch-harvest-rules
//!
//! Style-conditioned violation rule tables for arch-harvest, plus the
//! dependency-direction policy. Every rule is a plain data record
//! (tag, severity, predicate) held in an ordered table; the generic
//! interpreter in `arch-harvest-core` evaluates the style table first, then
//! the common table, raising severity monotonically.
//!
//! ## Rule catalog
//!
//! | Family | Tag | Severity |
//! |--------|-----|----------|
//! | layered/mvc | `layer_skip_in_layered` | high |
//! | layered/mvc | `reversed_dependency_in_layered` | high |
//! | layered/mvc | `business_logic_in_controller_layered` | medium |
//! | layered/mvc | `missing_transaction_in_layered` | high |
//! | hexagonal | `missing_port_adapter_in_hexagonal` | critical |
//! | hexagonal | `framework_dependency_in_domain_hexagonal` | critical |
//! | hexagonal | `adapter_without_port_hexagonal` | medium |
//! | clean_architecture | `outer_depends_on_inner_clean` | critical |
//! | clean_architecture | `usecase_framework_coupling_clean` | critical |
//! | clean_architecture | `entity_framework_coupling_clean` | medium |
//! | clean_architecture | `missing_gateway_interface_clean` | high |
//! | common | `broad_catch` | medium |
//! | common | `no_validation` | medium |
//! | common | `tight_coupling_new_keyword` | medium |

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod clean_architecture;
mod common;
mod direction;
mod hexagonal;
mod layered;
mod patterns;

use arch_harvest_core::{DependencyCounts, DirectionVerdict, Layer, RuleDef, RuleSet, Style};

/// The built-in rule tables and direction policy.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinRules;

impl BuiltinRules {
    /// Creates the built-in rule set.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl RuleSet for BuiltinRules {
    fn style_rules(&self, style: Style) -> &[RuleDef] {
        match style {
            Style::Layered | Style::Mvc => layered::RULES,
            Style::Hexagonal => hexagonal::RULES,
            Style::CleanArchitecture => clean_architecture::RULES,
        }
    }

    fn common_rules(&self) -> &[RuleDef] {
        common::RULES
    }

    fn direction(&self, layer: Layer, deps: &DependencyCounts, style: Style) -> DirectionVerdict {
        direction::analyze(layer, deps, style)
    }
}

/// Named rule families in evaluation order, for catalog listings.
#[must_use]
pub fn families() -> &'static [(&'static str, &'static [RuleDef])] {
    static FAMILIES: &[(&str, &[RuleDef])] = &[
        ("layered/mvc", layered::RULES),
        ("hexagonal", hexagonal::RULES),
        ("clean_architecture", clean_architecture::RULES),
        ("common", common::RULES),
    ];
    FAMILIES
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layered_and_mvc_share_a_table() {
        let rules = BuiltinRules::new();
        assert_eq!(
            rules.style_rules(Style::Layered).len(),
            rules.style_rules(Style::Mvc).len()
        );
        assert_eq!(rules.style_rules(Style::Layered)[0].tag, "layer_skip_in_layered");
    }

    #[test]
    fn every_family_is_listed() {
        let names: Vec<&str> = families().iter().map(|(name, _)| *name).collect();
        assert_eq!(
            names,
            vec!["layered/mvc", "hexagonal", "clean_architecture", "common"]
        );
    }

    #[test]
    fn catalog_tags_are_unique() {
        let mut tags: Vec<&str> = families()
            .iter()
            .flat_map(|(_, rules)| rules.iter().map(|r| r.tag))
            .collect();
        let total = tags.len();
        tags.sort_unstable();
        tags.dedup();
        assert_eq!(tags.len(), total);
    }
}
