//! Small shared helpers.

use regex::Regex;

/// Compiles a static pattern.
///
/// # Panics
///
/// Panics if the pattern does not compile; callers only pass string
/// literals, so a failure is a programming error caught by the pattern's
/// own unit tests.
#[must_use]
#[allow(clippy::expect_used)]
pub fn pattern(src: &str) -> Regex {
    Regex::new(src).expect("static pattern must compile")
}
