//! Exclusion filter: glob-style allow/deny matching for class names.
//!
//! Class names arrive in JVM internal (slash) form and are normalized to the
//! dot form operators write in config. Patterns use `*` for any run of
//! characters and `?` for exactly one; matching is anchored and
//! case-sensitive. A malformed pattern is a non-match, never an error, so a
//! miswritten exclusion fails toward analyzing more classes rather than
//! blocking the pipeline.

use regex::Regex;

/// Normalize a JVM internal name to operator-facing dot form.
pub fn normalize_class_name(name: &str) -> String {
    name.replace('/', ".")
}

/// Compile a glob pattern into an anchored regex; None when malformed.
pub(crate) fn compile_glob(pattern: &str) -> Option<Regex> {
    let mut re = String::with_capacity(pattern.len() + 2);
    re.push('^');
    for ch in pattern.chars() {
        match ch {
            '*' => re.push_str(".*"),
            '?' => re.push('.'),
            c => re.push_str(&regex::escape(&c.to_string())),
        }
    }
    re.push('$');
    Regex::new(&re).ok()
}

/// Whole-string glob match; malformed patterns never match.
pub fn glob_matches(pattern: &str, candidate: &str) -> bool {
    match compile_glob(pattern) {
        Some(re) => re.is_match(candidate),
        None => false,
    }
}

/// Decide whether a class is excluded from analysis entirely.
///
/// The class is skipped iff its normalized name matches ANY package pattern
/// or ANY class pattern. Pure function of its inputs.
pub fn should_skip(
    qualified_class_name: &str,
    exclude_packages: &[String],
    exclude_classes: &[String],
) -> bool {
    let normalized = normalize_class_name(qualified_class_name);
    exclude_packages
        .iter()
        .chain(exclude_classes.iter())
        .any(|pat| glob_matches(pat, &normalized))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pats(ps: &[&str]) -> Vec<String> {
        ps.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_slash_names_are_normalized_before_matching() {
        assert!(should_skip(
            "com/example/generated/Stub",
            &pats(&["com.example.generated.*"]),
            &[],
        ));
        assert!(!should_skip(
            "com/example/app/Gauge",
            &pats(&["com.example.generated.*"]),
            &[],
        ));
    }

    #[test]
    fn test_matching_is_anchored() {
        // A pattern with a literal slash can never match a normalized name
        assert!(!should_skip("app/MyRs", &pats(&["**/R"]), &[]));
        // Substring matches do not count
        assert!(!should_skip("com/app/RView", &pats(&[]), &pats(&["R"])));
        assert!(should_skip("R", &pats(&[]), &pats(&["R"])));
    }

    #[test]
    fn test_question_mark_matches_exactly_one() {
        let classes = pats(&["com.app.R?"]);
        assert!(should_skip("com/app/R$", &[], &classes));
        assert!(!should_skip("com/app/R", &[], &classes));
        assert!(!should_skip("com/app/Rxx", &[], &classes));
    }

    #[test]
    fn test_case_sensitive() {
        assert!(!should_skip("com/app/gauge", &[], &pats(&["com.app.Gauge"])));
        assert!(should_skip("com/app/Gauge", &[], &pats(&["com.app.Gauge"])));
    }

    #[test]
    fn test_either_pattern_list_can_exclude() {
        assert!(should_skip(
            "kotlin/collections/Maps",
            &pats(&["kotlin.*"]),
            &[],
        ));
        assert!(should_skip(
            "com/app/DebugOverlay",
            &[],
            &pats(&["*Overlay"]),
        ));
    }

    #[test]
    fn test_dot_in_pattern_is_literal() {
        // The dot must not behave as a regex wildcard after compilation
        assert!(!should_skip("comXapp/Gauge", &pats(&["com.app.*"]), &[]));
    }

    #[test]
    fn test_deterministic_pure_function() {
        let pk = pats(&["androidx.*"]);
        for _ in 0..3 {
            assert!(should_skip("androidx/core/view/ViewCompat", &pk, &[]));
        }
    }
}
