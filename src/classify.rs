//! Widget classification: decide whether a class is a drawable widget.
//!
//! Three-tier heuristic over the declared superclass, declared interfaces,
//! and the simple class name. Only the immediately declared hierarchy is
//! inspected; ancestors compiled outside the current unit are invisible, so
//! a widget whose parent chain passes through an unknown intermediate base
//! is only caught by the name heuristic. Over-inclusion is the accepted
//! trade-off.

/// Known widget base types (JVM internal form), matched exactly.
const WIDGET_BASES: &[&str] = &[
    "android/view/View",
    "android/view/ViewGroup",
    "android/view/SurfaceView",
    "android/view/TextureView",
];

/// Namespace prefixes under which every type is treated as a widget base.
const WIDGET_PREFIXES: &[&str] = &[
    "android/widget/",
    "android/view/",
    "androidx/appcompat/widget/",
    "com/google/android/material/",
];

/// Simple-name keywords for the tier-3 fallback (case-sensitive substrings).
const NAME_KEYWORDS: &[&str] = &["View", "Layout", "Button", "Text", "Image", "Custom"];

fn is_known_widget_type(name: &str) -> bool {
    WIDGET_BASES.contains(&name) || WIDGET_PREFIXES.iter().any(|p| name.starts_with(p))
}

/// Classify a class as a drawable widget.
///
/// Tiers, first match wins:
/// 1. declared superclass is a known widget type,
/// 2. any declared interface is a known widget type,
/// 3. the simple name contains a widget-ish keyword.
pub fn is_widget_class(superclass: &str, interfaces: &[String], simple_name: &str) -> bool {
    if is_known_widget_type(superclass) {
        return true;
    }
    if interfaces.iter().any(|i| is_known_widget_type(i)) {
        return true;
    }
    NAME_KEYWORDS.iter().any(|kw| simple_name.contains(kw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier1_direct_superclass() {
        assert!(is_widget_class("android/view/View", &[], "FooBarBaz"));
        assert!(is_widget_class(
            "android/widget/FrameLayout",
            &[],
            "FooBarBaz"
        ));
        assert!(is_widget_class(
            "com/google/android/material/card/MaterialCardView",
            &[],
            "FooBarBaz"
        ));
    }

    #[test]
    fn test_tier2_interfaces() {
        let ifaces = vec!["android/view/ViewManager".to_string()];
        assert!(is_widget_class("java/lang/Object", &ifaces, "FooBarBaz"));
    }

    #[test]
    fn test_tier3_name_keywords() {
        assert!(is_widget_class("java/lang/Object", &[], "SpeedGaugeView"));
        assert!(is_widget_class("java/lang/Object", &[], "CustomRenderer"));
        // Keywords are case-sensitive
        assert!(!is_widget_class("java/lang/Object", &[], "speedgaugeview"));
    }

    #[test]
    fn test_all_tiers_fail() {
        // Unknown base, no widget interfaces, no keyword in the name
        assert!(!is_widget_class("some/base/Widget", &[], "HelperUtil"));
    }

    #[test]
    fn test_tier_priority_short_circuits() {
        // Tier 1 decides even when the name heuristic would miss
        assert!(is_widget_class("android/view/SurfaceView", &[], "Xyz"));
    }
}
