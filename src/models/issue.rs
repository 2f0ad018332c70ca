//! Issue value objects: severity, issue categories, and detected issues.
//!
//! An `Issue` is immutable once created. Severity is derived from the issue
//! type, not stored. Dedup identity is the triple (type, location, message);
//! the suggestion text is deliberately excluded so reworded remediation hints
//! do not duplicate an already-reported finding.

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
#[serde(rename_all = "lowercase")]
/// Ordered severity scale; ordering drives sort/tie-break in reports.
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    /// Display label used by human output and report headers.
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Low => "LOW",
            Severity::Medium => "MEDIUM",
            Severity::High => "HIGH",
            Severity::Critical => "CRITICAL",
        }
    }

    /// Presentation color (hex) consumed by the external HTML renderer.
    pub fn color(&self) -> &'static str {
        match self {
            Severity::Low => "#8bc34a",
            Severity::Medium => "#ff9800",
            Severity::High => "#ff5722",
            Severity::Critical => "#f44336",
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
#[serde(rename_all = "kebab-case")]
/// Closed catalog of performance-risk pattern categories.
pub enum IssueType {
    ObjectAllocation,
    StringOperation,
    CollectionOperation,
    FileIo,
    NetworkOperation,
    DatabaseOperation,
    ImageDecode,
    HeavyComputation,
    Reflection,
    SystemCall,
    CustomPattern,
}

impl IssueType {
    /// Stable kebab-case identifier, matching the serialized form.
    pub fn id(&self) -> &'static str {
        match self {
            IssueType::ObjectAllocation => "object-allocation",
            IssueType::StringOperation => "string-operation",
            IssueType::CollectionOperation => "collection-operation",
            IssueType::FileIo => "file-io",
            IssueType::NetworkOperation => "network-operation",
            IssueType::DatabaseOperation => "database-operation",
            IssueType::ImageDecode => "image-decode",
            IssueType::HeavyComputation => "heavy-computation",
            IssueType::Reflection => "reflection",
            IssueType::SystemCall => "system-call",
            IssueType::CustomPattern => "custom-pattern",
        }
    }

    /// Display label used in reports.
    pub fn label(&self) -> &'static str {
        match self {
            IssueType::ObjectAllocation => "Object allocation",
            IssueType::StringOperation => "String operation",
            IssueType::CollectionOperation => "Collection operation",
            IssueType::FileIo => "File I/O",
            IssueType::NetworkOperation => "Network operation",
            IssueType::DatabaseOperation => "Database operation",
            IssueType::ImageDecode => "Image decoding",
            IssueType::HeavyComputation => "Heavy computation",
            IssueType::Reflection => "Reflection",
            IssueType::SystemCall => "System call",
            IssueType::CustomPattern => "Custom pattern",
        }
    }

    /// Default severity statically associated with the category.
    pub fn default_severity(&self) -> Severity {
        match self {
            IssueType::ObjectAllocation => Severity::High,
            IssueType::StringOperation => Severity::Medium,
            IssueType::CollectionOperation => Severity::Medium,
            IssueType::FileIo => Severity::Critical,
            IssueType::NetworkOperation => Severity::Critical,
            IssueType::DatabaseOperation => Severity::Critical,
            IssueType::ImageDecode => Severity::Critical,
            IssueType::HeavyComputation => Severity::Medium,
            IssueType::Reflection => Severity::High,
            IssueType::SystemCall => Severity::Low,
            IssueType::CustomPattern => Severity::Medium,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
/// One detected instance of a performance-risk pattern.
pub struct Issue {
    pub issue_type: IssueType,
    pub class_name: String,
    pub method_name: String,
    /// Source line, 0 when no line marker preceded the instruction.
    pub line: u32,
    pub message: String,
    pub suggestion: String,
    /// Derived `{class}.{method}:{line}` string, fixed at construction.
    pub location: String,
}

impl Issue {
    pub fn new(
        issue_type: IssueType,
        class_name: &str,
        method_name: &str,
        line: u32,
        message: String,
        suggestion: String,
    ) -> Self {
        let location = format!("{}.{}:{}", class_name, method_name, line);
        Issue {
            issue_type,
            class_name: class_name.to_string(),
            method_name: method_name.to_string(),
            line,
            message,
            suggestion,
            location,
        }
    }

    /// Derived severity; never stored on the issue itself.
    pub fn severity(&self) -> Severity {
        self.issue_type.default_severity()
    }

    /// Dedup identity: two issues are the same finding iff type, location,
    /// and message all match. Suggestion text does not participate.
    pub fn same_finding(&self, other: &Issue) -> bool {
        self.issue_type == other.issue_type
            && self.location == other.location
            && self.message == other.message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Low < Severity::Medium);
        assert!(Severity::Medium < Severity::High);
        assert!(Severity::High < Severity::Critical);
    }

    #[test]
    fn test_location_is_derived_at_construction() {
        let is = Issue::new(
            IssueType::ObjectAllocation,
            "Widgets.Gauge",
            "onDraw",
            0,
            "alloc".into(),
            "hoist".into(),
        );
        assert_eq!(is.location, "Widgets.Gauge.onDraw:0");
        assert_eq!(is.severity(), Severity::High);
    }

    #[test]
    fn test_same_finding_ignores_suggestion() {
        let a = Issue::new(
            IssueType::StringOperation,
            "A",
            "onDraw",
            3,
            "format call".into(),
            "cache the string".into(),
        );
        let b = Issue::new(
            IssueType::StringOperation,
            "A",
            "onDraw",
            3,
            "format call".into(),
            "precompute instead".into(),
        );
        assert!(a.same_finding(&b));
        let c = Issue::new(
            IssueType::StringOperation,
            "A",
            "onDraw",
            4,
            "format call".into(),
            "cache the string".into(),
        );
        assert!(!a.same_finding(&c));
    }

    #[test]
    fn test_issue_type_serializes_kebab_case() {
        let v = serde_json::to_value(IssueType::ObjectAllocation).unwrap();
        assert_eq!(v, "object-allocation");
        assert_eq!(IssueType::FileIo.id(), "file-io");
    }
}
