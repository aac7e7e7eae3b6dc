//! Compiled content patterns shared by the rule predicates.
//!
//! Every pattern is heuristic text matching over raw source; none of them
//! require a parse. Keeping them in one place makes the vocabulary each
//! rule depends on auditable.

use arch_harvest_core::util::pattern;
use once_cell::sync::Lazy;
use regex::Regex;

/// Control-flow-plus-mutation shapes that indicate business logic living in
/// a controller.
pub static BUSINESS_LOGIC_IN_CONTROLLER: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        pattern(r"if\s*\([^)]*\)\s*\{[^}]*(?:save|update|delete|calculate)"),
        pattern(r"for\s*\([^)]*\)\s*\{[^}]*(?:process|compute)"),
        pattern(r"\.stream\(\)\.filter\("),
        pattern(r"switch\s*\([^)]*\)\s*\{[^}]*case"),
    ]
});

/// A mutating persistence call.
pub static MUTATING_CALL: Lazy<Regex> = Lazy::new(|| pattern(r"\.(save|delete|update)\("));

/// Transactional marker anywhere in the file.
pub static TRANSACTIONAL: Lazy<Regex> = Lazy::new(|| pattern(r"@Transactional"));

/// Web-, persistence- or ORM-framework import.
pub static FRAMEWORK_IMPORT: Lazy<Regex> = Lazy::new(|| {
    pattern(r"import\s+org\.springframework\.|import\s+javax\.persistence\.|import\s+org\.hibernate\.")
});

/// Framework role annotations that must not appear in a use-case layer.
pub static FRAMEWORK_ROLE_MARKER: Lazy<Regex> =
    Lazy::new(|| pattern(r"@(Controller|RestController|Repository|Entity)"));

/// Persistence-framework annotations on an entity.
pub static PERSISTENCE_MARKER: Lazy<Regex> = Lazy::new(|| pattern(r"@(Entity|Table|Column|Id)"));

/// Root-exception catch clause.
pub static BROAD_CATCH: Lazy<Regex> =
    Lazy::new(|| pattern(r"catch\s*\(\s*(Exception|Throwable)\s+"));

/// Mutating HTTP endpoint that accepts a request body.
pub static MUTATING_ENDPOINT_WITH_BODY: Lazy<Regex> =
    Lazy::new(|| pattern(r"(?s)@(PostMapping|PutMapping).*@RequestBody"));

/// Validation marker.
pub static VALIDATION_MARKER: Lazy<Regex> = Lazy::new(|| pattern(r"@Valid|@Validated"));

/// Direct construction of an injectable collaborator.
pub static DIRECT_CONSTRUCTION: Lazy<Regex> =
    Lazy::new(|| pattern(r"new\s+(.*?)(Service|Repository|Dao|Adapter)\("));

/// Declared implementation of a port interface.
pub static IMPLEMENTS_PORT: Lazy<Regex> = Lazy::new(|| pattern(r"implements\s+\w+Port"));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn business_logic_shapes_match() {
        assert!(BUSINESS_LOGIC_IN_CONTROLLER
            .iter()
            .any(|re| re.is_match("if (order.isOpen()) { repository.save(order); }")));
        assert!(BUSINESS_LOGIC_IN_CONTROLLER
            .iter()
            .any(|re| re.is_match("items.stream().filter(Item::isActive)")));
        assert!(!BUSINESS_LOGIC_IN_CONTROLLER
            .iter()
            .any(|re| re.is_match("return service.handle(request);")));
    }

    #[test]
    fn mutation_patterns_span_lines() {
        // The brace body may cross lines; the character classes allow it.
        let content = "if (open) {\n    store.delete(order);\n}";
        assert!(BUSINESS_LOGIC_IN_CONTROLLER
            .iter()
            .any(|re| re.is_match(content)));
    }

    #[test]
    fn broad_catch_requires_root_types() {
        assert!(BROAD_CATCH.is_match("try {} catch (Exception e) {}"));
        assert!(BROAD_CATCH.is_match("catch ( Throwable t)"));
        assert!(!BROAD_CATCH.is_match("catch (IOException e)"));
    }

    #[test]
    fn endpoint_body_pattern_crosses_lines() {
        let content = "@PostMapping(\"/orders\")\npublic void create(@RequestBody Order o) {}";
        assert!(MUTATING_ENDPOINT_WITH_BODY.is_match(content));
        assert!(!MUTATING_ENDPOINT_WITH_BODY.is_match("@GetMapping\npublic Order get() {}"));
    }

    #[test]
    fn direct_construction_targets_injectables() {
        assert!(DIRECT_CONSTRUCTION.is_match("this.users = new UserService();"));
        assert!(DIRECT_CONSTRUCTION.is_match("var d = new LegacyOrderDao();"));
        assert!(!DIRECT_CONSTRUCTION.is_match("var b = new StringBuilder();"));
    }

    #[test]
    fn implements_port_is_literal() {
        assert!(IMPLEMENTS_PORT.is_match("class JdbcStore implements PaymentPort {"));
        assert!(!IMPLEMENTS_PORT.is_match("class JdbcStore implements Store {"));
    }
}
