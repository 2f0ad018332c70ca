//! Output rendering for analysis results.
//!
//! Supports `human` (default) and `json` outputs. The JSON form carries the
//! per-class results plus the roll-up summary and is the shape consumed by
//! the external report renderer.

use crate::models::{AnalysisSummary, ClassAnalysisResult, Severity};
use owo_colors::OwoColorize;
use serde_json::json;
use serde_json::Value as JsonVal;

fn use_colors(output: &str) -> bool {
    output != "json" && std::env::var_os("NO_COLOR").is_none()
}

fn severity_tag(sev: Severity, color: bool) -> String {
    let tag = format!("⟦{}⟧", sev.label());
    if !color {
        return tag;
    }
    match sev {
        Severity::Critical => tag.red().bold().to_string(),
        Severity::High => tag.red().to_string(),
        Severity::Medium => tag.yellow().bold().to_string(),
        Severity::Low => tag.blue().bold().to_string(),
    }
}

/// Print analysis results in the requested format.
pub fn print_analysis(
    variant: &str,
    results: &[ClassAnalysisResult],
    summary: &AnalysisSummary,
    output: &str,
) {
    match output {
        "json" => println!(
            "{}",
            serde_json::to_string_pretty(&compose_analysis_json(variant, results, summary))
                .unwrap()
        ),
        _ => {
            let color = use_colors(output);
            for result in results {
                let methods: Vec<&str> = result
                    .implemented_methods
                    .iter()
                    .map(|m| m.label())
                    .collect();
                let header = format!("{} ❲{}❳", result.class_name, methods.join(", "));
                if color {
                    println!("{}", header.bold());
                } else {
                    println!("{}", header);
                }
                for issue in &result.issues {
                    println!(
                        "  {} {} {} — {}",
                        severity_tag(issue.severity(), color),
                        issue.issue_type.label(),
                        issue.location,
                        issue.message
                    );
                    if color {
                        println!("      ↳ {}", issue.suggestion.bright_black());
                    } else {
                        println!("      ↳ {}", issue.suggestion);
                    }
                }
            }
            let line = format!(
                "— Summary ({}) — classes={} with_issues={} issues={}",
                variant,
                summary.classes_analyzed,
                summary.classes_with_issues,
                summary.total_issues
            );
            if color {
                println!("{}", line.bold());
            } else {
                println!("{}", line);
            }
        }
    }
}

/// Compose the analysis JSON object (pure) for testing/snapshot purposes.
pub fn compose_analysis_json(
    variant: &str,
    results: &[ClassAnalysisResult],
    summary: &AnalysisSummary,
) -> JsonVal {
    json!({
        "variant": variant,
        "results": serde_json::to_value(results).unwrap(),
        "summary": serde_json::to_value(summary).unwrap(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::summarize;
    use crate::models::{DrawMethodType, Issue, IssueType};

    #[test]
    fn test_compose_analysis_json_shape() {
        let mut result = ClassAnalysisResult::new("Widgets.Gauge".into());
        result.implemented_methods.insert(DrawMethodType::OnDraw);
        result.issues.push(Issue::new(
            IssueType::ObjectAllocation,
            "Widgets.Gauge",
            "onDraw",
            10,
            "alloc".into(),
            "hoist".into(),
        ));
        let results = vec![result];
        let summary = summarize(&results);
        let out = compose_analysis_json("debug", &results, &summary);
        assert_eq!(out["variant"], "debug");
        assert_eq!(out["results"][0]["class_name"], "Widgets.Gauge");
        assert_eq!(
            out["results"][0]["issues"][0]["issue_type"],
            "object-allocation"
        );
        assert_eq!(
            out["results"][0]["issues"][0]["location"],
            "Widgets.Gauge.onDraw:10"
        );
        assert_eq!(out["summary"]["total_issues"], 1);
        assert_eq!(out["summary"]["by_severity"]["high"], 1);
    }
}
