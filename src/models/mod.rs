//! Shared data models for analysis results, instruction events, and summaries.

pub mod class;
pub mod event;
pub mod issue;

pub use class::{ClassAnalysisResult, DrawMethodType};
pub use event::{ClassEvents, FieldOp, InstructionEvent, MethodEvents};
pub use issue::{Issue, IssueType, Severity};

use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Serialize)]
/// Roll-up counts over a set of class results, recomputed on demand.
pub struct AnalysisSummary {
    pub classes_analyzed: usize,
    pub classes_with_issues: usize,
    pub total_issues: usize,
    pub by_severity: BTreeMap<Severity, usize>,
    pub by_type: BTreeMap<IssueType, usize>,
    pub by_class: BTreeMap<String, usize>,
}
