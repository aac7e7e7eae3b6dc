//! Cross-layer dependency extraction.
//!
//! Scans file content for declared collaborator types using two independent
//! patterns: injection-style annotated fields and constructor parameter
//! lists. Captured type names are tested against a fixed keyword set and
//! bucketed by target layer. One token may increment several buckets when it
//! contains several keywords; this over-counting is a deliberate
//! conservative heuristic and is preserved as-is.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::types::DependencyCounts;
use crate::util::pattern;

static INJECTED_FIELD: Lazy<Regex> =
    Lazy::new(|| pattern(r"@Autowired\s+(?:private\s+)?(\w+)\s+(\w+);"));

static CONSTRUCTOR_PARAMS: Lazy<Regex> = Lazy::new(|| pattern(r"public\s+\w+\s*\(([^)]+)\)"));

/// Extracts per-target-layer dependency counts from one file's content.
#[must_use]
pub fn extract(content: &str) -> DependencyCounts {
    let mut deps = DependencyCounts::default();

    for capture in INJECTED_FIELD.captures_iter(content) {
        let type_name = capture[1].to_lowercase();
        bucket_lowercase(&mut deps, &type_name);
    }

    for capture in CONSTRUCTOR_PARAMS.captures_iter(content) {
        let params = &capture[1];
        bucket_typed(&mut deps, params);
    }

    deps
}

/// Buckets one lowercased injected-field type name.
fn bucket_lowercase(deps: &mut DependencyCounts, type_name: &str) {
    if type_name.contains("controller") {
        deps.controller += 1;
    }
    if type_name.contains("service") {
        deps.service += 1;
    }
    if type_name.contains("repository") || type_name.contains("dao") {
        deps.repository += 1;
    }
    if type_name.contains("adapter") {
        deps.adapter += 1;
    }
    if type_name.contains("port") {
        deps.port += 1;
    }
    if type_name.contains("usecase") {
        deps.usecase += 1;
    }
    if type_name.contains("gateway") {
        deps.gateway += 1;
    }
}

/// Buckets one constructor parameter list by its type-name casing.
fn bucket_typed(deps: &mut DependencyCounts, params: &str) {
    if params.contains("Controller") {
        deps.controller += 1;
    }
    if params.contains("Service") {
        deps.service += 1;
    }
    if params.contains("Repository") || params.contains("Dao") {
        deps.repository += 1;
    }
    if params.contains("Adapter") {
        deps.adapter += 1;
    }
    if params.contains("Port") {
        deps.port += 1;
    }
    if params.contains("UseCase") {
        deps.usecase += 1;
    }
    if params.contains("Gateway") {
        deps.gateway += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn injected_fields_are_bucketed() {
        let content = "\
            @Autowired\n private UserService userService;\n\
            @Autowired\n private OrderRepository orderRepository;\n";
        let deps = extract(content);
        assert_eq!(deps.service, 1);
        assert_eq!(deps.repository, 1);
        assert_eq!(deps.controller, 0);
    }

    #[test]
    fn constructor_parameters_are_bucketed() {
        let content = "public OrderHandler(OrderService service, PaymentGateway gateway) {}";
        let deps = extract(content);
        assert_eq!(deps.service, 1);
        assert_eq!(deps.gateway, 1);
    }

    #[test]
    fn one_token_may_fill_several_buckets() {
        // "NotificationServicePortAdapter" carries three keywords; the
        // over-count is intentional.
        let content = "@Autowired\n private NotificationServicePortAdapter out;";
        let deps = extract(content);
        assert_eq!(deps.service, 1);
        assert_eq!(deps.port, 1);
        assert_eq!(deps.adapter, 1);
        assert_eq!(deps.total(), 3);
    }

    #[test]
    fn dao_counts_toward_repository() {
        let deps = extract("public InvoiceService(InvoiceDao dao) {}");
        assert_eq!(deps.repository, 1);
    }

    #[test]
    fn entity_bucket_is_never_incremented() {
        let deps = extract(
            "@Autowired\n private UserEntity user;\n\
             public Foo(OrderEntity entity) {}",
        );
        assert_eq!(deps.entity, 0);
    }

    #[test]
    fn empty_content_yields_fully_populated_zeros() {
        let deps = extract("");
        assert_eq!(deps, DependencyCounts::default());
        assert_eq!(deps.total(), 0);
    }
}
