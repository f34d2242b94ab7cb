//! Helpers for building the built-in pattern tables.
//!
//! Every table is compiled once into a `once_cell::sync::Lazy` static. The `regex` crate
//! matches in linear time, so no input can trigger catastrophic backtracking.

use regex::{Regex, RegexBuilder};

/// Compile a built-in, case-insensitive pattern.
///
/// Built-in patterns are string literals covered by the table tests; an invalid one is a
/// programming error, so this panics rather than returning a `Result`.
pub(crate) fn compile(pattern: &str) -> Regex {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .unwrap_or_else(|e| panic!("invalid built-in pattern {pattern:?}: {e}"))
}

/// Case-sensitive variant, for patterns that depend on capitalisation.
pub(crate) fn compile_exact(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| panic!("invalid built-in pattern {pattern:?}: {e}"))
}

/// Pattern matching `a` and `b` within `gap` characters of each other, in either order,
/// without crossing a sentence or clause boundary.
pub(crate) fn near(a: &str, b: &str, gap: usize) -> String {
    format!(r"\b(?:{a})[^.;]{{0,{gap}}}?\b(?:{b})|\b(?:{b})[^.;]{{0,{gap}}}?\b(?:{a})")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compile_is_case_insensitive() {
        assert!(compile(r"\bacl\b").is_match("Complete ACL tear"));
        assert!(!compile_exact(r"\bacl\b").is_match("Complete ACL tear"));
    }

    #[test]
    fn near_matches_either_order_within_gap() {
        let re = compile(&near("chondr\\w*", "patell\\w*", 20));
        assert!(re.is_match("chondromalacia patellae"));
        assert!(re.is_match("patellar cartilage with chondral fissuring"));
        assert!(!re.is_match("chondral loss. The patella is normal"));
    }
}
