//! Instruction rule engine: single-pass scan of a draw method's event stream.
//!
//! A `MethodScan` consumes instruction events in program order, classifying
//! each against the rule catalog. The only mutable state is the current
//! source line; classification never looks ahead or behind. Closing consumes
//! the scan, so a double close is unrepresentable. Events arriving after a
//! `MethodEnd` marker are ignored.

use crate::classify;
use crate::filter;
use crate::models::{ClassAnalysisResult, ClassEvents, DrawMethodType, InstructionEvent, Issue};
use crate::rules::{RuleHit, RuleSet};

/// In-progress scan of one draw method.
pub struct MethodScan<'r> {
    class_name: String,
    method: DrawMethodType,
    rules: &'r RuleSet,
    current_line: u32,
    issues: Vec<Issue>,
    closed: bool,
}

impl<'r> MethodScan<'r> {
    /// Open a scan. `class_name` is the dot-form qualified name used for
    /// issue locations.
    pub fn new(class_name: &str, method: DrawMethodType, rules: &'r RuleSet) -> Self {
        MethodScan {
            class_name: class_name.to_string(),
            method,
            rules,
            current_line: 0,
            issues: Vec::new(),
            closed: false,
        }
    }

    fn record(&mut self, hit: RuleHit) {
        self.issues.push(Issue::new(
            hit.issue_type,
            &self.class_name,
            self.method.method_name(),
            self.current_line,
            hit.message,
            hit.suggestion,
        ));
    }

    /// Feed one instruction event. Unrecognized instructions match no rule
    /// and are not an error.
    pub fn observe(&mut self, event: &InstructionEvent) {
        if self.closed {
            return;
        }
        match event {
            InstructionEvent::Line { number } => self.current_line = *number,
            InstructionEvent::Alloc { type_name } => {
                if let Some(hit) = self.rules.check_alloc(type_name) {
                    self.record(hit);
                }
            }
            InstructionEvent::Invoke { owner, name } => {
                for hit in self.rules.check_invoke(owner, name) {
                    self.record(hit);
                }
            }
            InstructionEvent::Field { op, owner, name } => {
                if let Some(hit) = self.rules.check_field(*op, owner, name) {
                    self.record(hit);
                }
            }
            InstructionEvent::MethodEnd => self.closed = true,
        }
    }

    /// Close the scan and flush issues in detection order. Consuming `self`
    /// makes closing twice a compile error rather than a runtime guard.
    pub fn close(self) -> Vec<Issue> {
        self.issues
    }
}

/// Run the full per-class pipeline: classify, locate draw methods, scan each.
///
/// `on_issue` fires per detected issue in detection order. Returns the class
/// result once all draw methods have closed, or None when the class is not a
/// widget or implements no draw callback.
pub fn scan_class<F>(class: &ClassEvents, rules: &RuleSet, mut on_issue: F) -> Option<ClassAnalysisResult>
where
    F: FnMut(&Issue),
{
    if !classify::is_widget_class(&class.superclass, &class.interfaces, class.simple_name()) {
        return None;
    }
    let dotted = filter::normalize_class_name(&class.class_name);
    let mut result = ClassAnalysisResult::new(dotted.clone());
    for method in &class.methods {
        let kind = match DrawMethodType::from_method_name(&method.name) {
            Some(k) => k,
            None => continue,
        };
        result.implemented_methods.insert(kind);
        let mut scan = MethodScan::new(&dotted, kind, rules);
        for event in &method.events {
            scan.observe(event);
        }
        for issue in scan.close() {
            on_issue(&issue);
            result.issues.push(issue);
        }
    }
    if result.has_draw_methods() {
        Some(result)
    } else {
        None
    }
}
