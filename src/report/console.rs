use crate::report::report_model::ResolveReport;

/// Format a resolve report for terminal output.
///
/// ```text
/// ✓ home_screen
///     image = image_100
///     text = text_101
/// ✗ profile
///     [ERROR] Layout 'profile' rejected: invalid delegated field 'age' ...
///
/// === Results: 1 resolved, 1 failed (2 total) ===
/// ```
pub fn format_console_report(report: &ResolveReport) -> String {
    let mut out = String::new();

    for result in &report.results {
        let marker = if result.passed { "\u{2713}" } else { "\u{2717}" };
        out.push_str(&format!("{} {}\n", marker, result.layout));

        for (field, value) in &result.values {
            out.push_str(&format!("    {} = {}\n", field, value));
        }

        if let Some(ref error) = result.error {
            out.push_str(&format!("    [ERROR] {}\n", error));
        }
    }

    out.push_str(&format!(
        "\n=== Results: {} resolved, {} failed ({} total) ===\n",
        report.resolved, report.failed, report.total
    ));

    out
}

/// One line per layout, for `check`.
pub fn format_check_summary(report: &ResolveReport) -> String {
    report
        .results
        .iter()
        .map(|r| match &r.error {
            None => format!("ok    {}\n", r.layout),
            Some(e) => format!("FAIL  {}: {}\n", r.layout, e),
        })
        .collect()
}
