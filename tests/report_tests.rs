use std::collections::BTreeMap;

use field_delegate::layout::layout_model::{IdentifierSpec, LayoutSpec};
use field_delegate::report::console::{format_check_summary, format_console_report};
use field_delegate::report::json::format_json_report;
use field_delegate::report::report_model::{ContainerResult, ResolveReport};
use field_delegate::trace::logger::TraceLogger;

// ============================================================================
// Helper builders
// ============================================================================

fn layout(name: &str, fields: &[&str]) -> LayoutSpec {
    LayoutSpec {
        name: name.to_string(),
        identifier: IdentifierSpec::Canonical,
        fields: fields.iter().map(|f| f.to_string()).collect(),
    }
}

fn mixed_report() -> ResolveReport {
    ResolveReport::from_layouts(
        &[layout("home", &["image", "text"]), layout("profile", &["age"])],
        &TraceLogger::disabled(),
    )
}

// ============================================================================
// Report model
// ============================================================================

#[test]
fn report_counts() {
    let report = mixed_report();
    assert_eq!(report.total, 2);
    assert_eq!(report.resolved, 1);
    assert_eq!(report.failed, 1);
    assert!(!report.all_resolved());
}

#[test]
fn report_all_resolved_when_empty() {
    let report = ResolveReport::from_results(vec![]);
    assert_eq!(report.total, 0);
    assert!(report.all_resolved());
}

#[test]
fn container_result_captures_values_and_errors() {
    let report = mixed_report();

    let home = &report.results[0];
    assert!(home.passed);
    assert_eq!(home.values.get("image").map(String::as_str), Some("image_100"));
    assert!(home.error.is_none());

    let profile = &report.results[1];
    assert!(!profile.passed);
    assert!(profile.values.is_empty());
    assert!(profile.error.as_deref().unwrap().contains("'age'"));
}

// ============================================================================
// Console reporter
// ============================================================================

#[test]
fn console_report_lists_values_and_errors() {
    let out = format_console_report(&mixed_report());
    assert!(out.contains("\u{2713} home"));
    assert!(out.contains("    image = image_100"));
    assert!(out.contains("    text = text_101"));
    assert!(out.contains("\u{2717} profile"));
    assert!(out.contains("[ERROR] Layout 'profile' rejected"));
    assert!(out.contains("=== Results: 1 resolved, 1 failed (2 total) ==="));
}

#[test]
fn check_summary_one_line_per_layout() {
    let out = format_check_summary(&mixed_report());
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], "ok    home");
    assert!(lines[1].starts_with("FAIL  profile: "));
}

// ============================================================================
// JSON reporter
// ============================================================================

#[test]
fn json_report_is_parseable() {
    let json = format_json_report(&mixed_report()).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(parsed["total"], 2);
    assert_eq!(parsed["results"][0]["values"]["text"], "text_101");
    assert!(parsed["results"][0].get("error").is_none());
    assert!(parsed["results"][1]["error"].is_string());
}

#[test]
fn json_report_deserializes_back() {
    let mut values = BTreeMap::new();
    values.insert("image".to_string(), "image_1".to_string());
    let report = ResolveReport::from_results(vec![ContainerResult {
        layout: "one".into(),
        passed: true,
        values,
        error: None,
    }]);

    let json = format_json_report(&report).unwrap();
    let parsed: ResolveReport = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.results, report.results);
}
