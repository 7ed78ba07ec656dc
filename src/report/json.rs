use crate::{layout::error::LayoutError, report::report_model::ResolveReport};

pub fn format_json_report(report: &ResolveReport) -> Result<String, LayoutError> {
    serde_json::to_string_pretty(report).map_err(|source| LayoutError::Serialize {
        context: "resolve report".to_string(),
        source,
    })
}
