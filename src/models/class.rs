//! Per-class analysis results and the draw-callback catalog.

use crate::models::issue::Issue;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug)]
#[serde(rename_all = "camelCase")]
/// The draw callbacks recognized on widget classes.
pub enum DrawMethodType {
    OnDraw,
    DispatchDraw,
}

impl DrawMethodType {
    /// Canonical method name as it appears in bytecode.
    pub fn method_name(&self) -> &'static str {
        match self {
            DrawMethodType::OnDraw => "onDraw",
            DrawMethodType::DispatchDraw => "dispatchDraw",
        }
    }

    /// Display label used in reports.
    pub fn label(&self) -> &'static str {
        match self {
            DrawMethodType::OnDraw => "onDraw()",
            DrawMethodType::DispatchDraw => "dispatchDraw()",
        }
    }

    /// Match a declared method name against the draw-callback catalog.
    pub fn from_method_name(name: &str) -> Option<DrawMethodType> {
        match name {
            "onDraw" => Some(DrawMethodType::OnDraw),
            "dispatchDraw" => Some(DrawMethodType::DispatchDraw),
            _ => None,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
/// Aggregate result for one analyzed class within one build variant.
///
/// Only created for classes that classify as widgets and implement at least
/// one draw callback. Repeated submissions of the same class are merged by
/// the result store, never replaced.
pub struct ClassAnalysisResult {
    pub class_name: String,
    pub implemented_methods: BTreeSet<DrawMethodType>,
    pub issues: Vec<Issue>,
}

impl ClassAnalysisResult {
    pub fn new(class_name: String) -> Self {
        ClassAnalysisResult {
            class_name,
            implemented_methods: BTreeSet::new(),
            issues: Vec::new(),
        }
    }

    pub fn issue_count(&self) -> usize {
        self.issues.len()
    }

    pub fn has_issues(&self) -> bool {
        !self.issues.is_empty()
    }

    pub fn has_draw_methods(&self) -> bool {
        !self.implemented_methods.is_empty()
    }

    /// Merge a later pass over the same class into this result.
    ///
    /// Implemented-method sets are unioned. Issues are appended only when no
    /// earlier issue shares the same finding identity; previously accepted
    /// issues keep their first-seen positions.
    pub fn merge(&mut self, other: ClassAnalysisResult) {
        self.implemented_methods.extend(other.implemented_methods);
        for incoming in other.issues {
            if !self.issues.iter().any(|is| is.same_finding(&incoming)) {
                self.issues.push(incoming);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::issue::IssueType;

    fn issue(line: u32, msg: &str) -> Issue {
        Issue::new(
            IssueType::ObjectAllocation,
            "Widgets.Gauge",
            "onDraw",
            line,
            msg.into(),
            "hoist".into(),
        )
    }

    #[test]
    fn test_draw_method_lookup() {
        assert_eq!(
            DrawMethodType::from_method_name("onDraw"),
            Some(DrawMethodType::OnDraw)
        );
        assert_eq!(
            DrawMethodType::from_method_name("dispatchDraw"),
            Some(DrawMethodType::DispatchDraw)
        );
        assert_eq!(DrawMethodType::from_method_name("onMeasure"), None);
        // Matching is exact, not case-folded
        assert_eq!(DrawMethodType::from_method_name("ondraw"), None);
    }

    #[test]
    fn test_merge_unions_methods_and_dedups_issues() {
        let mut a = ClassAnalysisResult::new("Widgets.Gauge".into());
        a.implemented_methods.insert(DrawMethodType::OnDraw);
        a.issues.push(issue(10, "x"));

        let mut b = ClassAnalysisResult::new("Widgets.Gauge".into());
        b.implemented_methods.insert(DrawMethodType::DispatchDraw);
        b.issues.push(issue(10, "x"));
        b.issues.push(issue(12, "y"));

        a.merge(b);
        assert_eq!(a.implemented_methods.len(), 2);
        assert_eq!(a.issue_count(), 2);
        assert_eq!(a.issues[0].line, 10);
        assert_eq!(a.issues[1].line, 12);
    }
}
