//! Code-characteristic flags: what the file appears to do.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::types::CodeCharacteristics;
use crate::util::pattern;

static BUSINESS_LOGIC: Lazy<Regex> =
    Lazy::new(|| pattern(r"if\s*\(|for\s*\(|while\s*\(|switch\s*\(|\.stream\(\)"));

static DATA_ACCESS: Lazy<Regex> =
    Lazy::new(|| pattern(r"\.(save|find|delete|update|query|execute)\(|@Query|JpaRepository"));

static HTTP_HANDLING: Lazy<Regex> = Lazy::new(|| {
    pattern(
        r"@(GetMapping|PostMapping|PutMapping|DeleteMapping|RequestMapping)|HttpServletRequest|HttpServletResponse",
    )
});

static VALIDATION: Lazy<Regex> = Lazy::new(|| pattern(r"@Valid|@Validated|@NotNull|@NotEmpty"));

static TRANSACTION: Lazy<Regex> = Lazy::new(|| pattern(r"@Transactional"));

/// Derives the five boolean characteristic flags from one file's content.
#[must_use]
pub fn analyze(content: &str) -> CodeCharacteristics {
    CodeCharacteristics {
        has_business_logic: BUSINESS_LOGIC.is_match(content),
        has_data_access: DATA_ACCESS.is_match(content),
        has_http_handling: HTTP_HANDLING.is_match(content),
        has_validation: VALIDATION.is_match(content),
        has_transaction: TRANSACTION.is_match(content),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn control_flow_marks_business_logic() {
        assert!(analyze("if (x > 0) { y(); }").has_business_logic);
        assert!(analyze("items.stream().map(f)").has_business_logic);
        assert!(!analyze("int x = 1;").has_business_logic);
    }

    #[test]
    fn persistence_calls_mark_data_access() {
        assert!(analyze("repository.save(user);").has_data_access);
        assert!(analyze("@Query(\"select u from U u\")").has_data_access);
        assert!(!analyze("log.info(\"saved\");").has_data_access);
    }

    #[test]
    fn mapping_annotations_mark_http_handling() {
        assert!(analyze("@GetMapping(\"/users\")").has_http_handling);
        assert!(analyze("void f(HttpServletRequest req)").has_http_handling);
        assert!(!analyze("class Plain {}").has_http_handling);
    }

    #[test]
    fn validation_and_transaction_markers() {
        let c = analyze("@Transactional\npublic void f(@Valid User u) {}");
        assert!(c.has_validation);
        assert!(c.has_transaction);
    }
}
