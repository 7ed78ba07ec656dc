use crate::cli::config::build_identifier;
use crate::container::ui::UiContainer;
use crate::layout::loader::load_layouts;
use crate::report::console::{format_check_summary, format_console_report};
use crate::report::json::format_json_report;
use crate::report::report_model::ResolveReport;
use crate::trace::logger::TraceLogger;

// ============================================================================
// read subcommand
// ============================================================================

/// Bind one field and return its delegated value.
pub fn cmd_read(
    field: &str,
    image_id: Option<&str>,
    text_id: Option<&str>,
    verbose: u8,
    tracer: &TraceLogger,
) -> Result<String, Box<dyn std::error::Error>> {
    let id = build_identifier(image_id, text_id);

    if verbose > 0 {
        eprintln!(
            "Binding '{}' (image_id={}, text_id={})...",
            field,
            id.image_id(),
            id.text_id()
        );
    }

    let container = UiContainer::build_traced("cli", &[field], id, tracer)?;
    container
        .get_traced(field, tracer)
        .ok_or_else(|| format!("field '{}' was not bound", field).into())
}

// ============================================================================
// resolve subcommand
// ============================================================================

/// Resolve every layout and return whether all containers were built.
pub fn cmd_resolve(
    layout_path: &str,
    format: &str,
    output: Option<&str>,
    verbose: u8,
    tracer: &TraceLogger,
) -> Result<bool, Box<dyn std::error::Error>> {
    let report = build_report(layout_path, verbose, tracer)?;

    let output_content = match format {
        "json" => format_json_report(&report)?,
        _ => format_console_report(&report),
    };

    match output {
        Some(path) => std::fs::write(path, &output_content)?,
        None => print!("{}", output_content),
    }

    Ok(report.all_resolved())
}

// ============================================================================
// check subcommand
// ============================================================================

pub fn cmd_check(
    layout_path: &str,
    verbose: u8,
    tracer: &TraceLogger,
) -> Result<bool, Box<dyn std::error::Error>> {
    let report = build_report(layout_path, verbose, tracer)?;
    print!("{}", format_check_summary(&report));
    Ok(report.all_resolved())
}

// ============================================================================
// Helpers
// ============================================================================

fn build_report(
    layout_path: &str,
    verbose: u8,
    tracer: &TraceLogger,
) -> Result<ResolveReport, Box<dyn std::error::Error>> {
    let layouts = load_layouts(layout_path)?;

    if layouts.is_empty() {
        eprintln!("No layouts found at: {}", layout_path);
    } else if verbose > 0 {
        eprintln!("Resolving {} layouts...", layouts.len());
    }

    Ok(ResolveReport::from_layouts(&layouts, tracer))
}

/// Open the trace log at `path`, or a disabled logger when none is set.
pub fn build_tracer(path: Option<&str>) -> TraceLogger {
    match path {
        Some(p) => TraceLogger::new(p),
        None => TraceLogger::disabled(),
    }
}
