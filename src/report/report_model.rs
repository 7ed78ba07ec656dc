use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{
    container::ui::UiContainer,
    layout::{error::LayoutError, layout_model::LayoutSpec},
    trace::logger::TraceLogger,
};

// ============================================================================
// Per-container outcome
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContainerResult {
    /// Layout (container) name
    pub layout: String,

    /// Whether every declared field bound successfully
    pub passed: bool,

    /// Read value of every bound field, keyed by field name
    pub values: BTreeMap<String, String>,

    /// Construction error, if the container could not be built
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ContainerResult {
    pub fn resolved(container: &UiContainer) -> Self {
        Self {
            layout: container.name().to_string(),
            passed: true,
            values: container.values(),
            error: None,
        }
    }

    pub fn failed(layout: &str, error: &LayoutError) -> Self {
        Self {
            layout: layout.to_string(),
            passed: false,
            values: BTreeMap::new(),
            error: Some(error.to_string()),
        }
    }

    /// Assemble one layout and capture the outcome.
    pub fn from_layout(layout: &LayoutSpec, tracer: &TraceLogger) -> Self {
        match layout.assemble(tracer) {
            Ok(container) => Self::resolved(&container),
            Err(e) => Self::failed(&layout.name, &e),
        }
    }
}

// ============================================================================
// Aggregate report
// ============================================================================

/// Aggregated outcome of resolving a set of layouts.
///
/// Consumed by the console and JSON reporters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolveReport {
    pub total: usize,
    pub resolved: usize,
    pub failed: usize,
    pub results: Vec<ContainerResult>,
}

impl ResolveReport {
    pub fn from_results(results: Vec<ContainerResult>) -> Self {
        let total = results.len();
        let resolved = results.iter().filter(|r| r.passed).count();
        Self {
            total,
            resolved,
            failed: total - resolved,
            results,
        }
    }

    pub fn from_layouts(layouts: &[LayoutSpec], tracer: &TraceLogger) -> Self {
        Self::from_results(
            layouts
                .iter()
                .map(|l| ContainerResult::from_layout(l, tracer))
                .collect(),
        )
    }

    pub fn all_resolved(&self) -> bool {
        self.failed == 0
    }
}
