//! Thread-safe result store keyed by build variant, plus summary projection.
//!
//! The store is the only shared mutable structure in the pipeline. Workers
//! scanning different classes of the same variant submit concurrently;
//! repeated scans of the same class are expected input and are merged, never
//! overwritten, so submission is idempotent. Readers always get a snapshot,
//! never a live view. Locking covers only the mutation itself.

use crate::models::{AnalysisSummary, ClassAnalysisResult};
use std::collections::{BTreeMap, HashMap};
use std::sync::RwLock;

#[derive(Default)]
struct VariantBucket {
    results: HashMap<String, ClassAnalysisResult>,
    reported: bool,
}

/// Per-variant accumulator for class analysis results.
///
/// Constructed explicitly and shared by reference with workers; there is no
/// process-global instance.
#[derive(Default)]
pub struct ResultStore {
    inner: RwLock<HashMap<String, VariantBucket>>,
}

impl ResultStore {
    pub fn new() -> Self {
        ResultStore::default()
    }

    /// Insert or merge a class result for the given variant.
    pub fn submit(&self, variant: &str, result: ClassAnalysisResult) {
        let mut buckets = self.inner.write().expect("result store lock poisoned");
        let bucket = buckets.entry(variant.to_string()).or_default();
        match bucket.results.get_mut(&result.class_name) {
            Some(existing) => existing.merge(result),
            None => {
                bucket.results.insert(result.class_name.clone(), result);
            }
        }
    }

    /// Snapshot of one variant's results, sorted by class name.
    pub fn results(&self, variant: &str) -> Vec<ClassAnalysisResult> {
        let buckets = self.inner.read().expect("result store lock poisoned");
        let mut out: Vec<ClassAnalysisResult> = buckets
            .get(variant)
            .map(|b| b.results.values().cloned().collect())
            .unwrap_or_default();
        out.sort_by(|a, b| a.class_name.cmp(&b.class_name));
        out
    }

    /// Snapshot of every variant's results.
    pub fn all_results(&self) -> BTreeMap<String, Vec<ClassAnalysisResult>> {
        let buckets = self.inner.read().expect("result store lock poisoned");
        buckets
            .iter()
            .map(|(variant, bucket)| {
                let mut rs: Vec<ClassAnalysisResult> =
                    bucket.results.values().cloned().collect();
                rs.sort_by(|a, b| a.class_name.cmp(&b.class_name));
                (variant.clone(), rs)
            })
            .collect()
    }

    /// Names of variants with at least one submitted result.
    pub fn variants(&self) -> Vec<String> {
        let buckets = self.inner.read().expect("result store lock poisoned");
        let mut vs: Vec<String> = buckets.keys().cloned().collect();
        vs.sort();
        vs
    }

    /// Invoke `f` with the variant's snapshot at most once per variant; a
    /// second call before `clear` is a no-op. Returns whether `f` ran.
    pub fn report_once<F>(&self, variant: &str, f: F) -> bool
    where
        F: FnOnce(&[ClassAnalysisResult]),
    {
        {
            let mut buckets = self.inner.write().expect("result store lock poisoned");
            match buckets.get_mut(variant) {
                Some(bucket) if !bucket.reported => bucket.reported = true,
                _ => return false,
            }
        }
        // Lock released before the snapshot read and the callback
        let snapshot = self.results(variant);
        f(&snapshot);
        true
    }

    /// Drop all state for one variant.
    pub fn clear(&self, variant: &str) {
        let mut buckets = self.inner.write().expect("result store lock poisoned");
        buckets.remove(variant);
    }

    /// Drop everything, e.g. between builds.
    pub fn clear_all(&self) {
        let mut buckets = self.inner.write().expect("result store lock poisoned");
        buckets.clear();
    }
}

/// Project a result snapshot into roll-up counts. Pure.
pub fn summarize(results: &[ClassAnalysisResult]) -> AnalysisSummary {
    let mut by_severity = BTreeMap::new();
    let mut by_type = BTreeMap::new();
    let mut by_class = BTreeMap::new();
    let mut total = 0usize;
    let mut with_issues = 0usize;
    for result in results {
        if result.has_issues() {
            with_issues += 1;
        }
        by_class.insert(result.class_name.clone(), result.issue_count());
        for issue in &result.issues {
            total += 1;
            *by_severity.entry(issue.severity()).or_insert(0) += 1;
            *by_type.entry(issue.issue_type).or_insert(0) += 1;
        }
    }
    AnalysisSummary {
        classes_analyzed: results.len(),
        classes_with_issues: with_issues,
        total_issues: total,
        by_severity,
        by_type,
        by_class,
    }
}
