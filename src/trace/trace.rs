use serde::Serialize;
use std::time::{SystemTime, UNIX_EPOCH};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TraceKind {
    Bind,
    Read,
    Rejected,
    Duplicate,
}

#[derive(Debug, Serialize)]
pub struct TraceEvent {
    pub timestamp_ms: u128,
    pub seq: u64,

    pub container: String,
    pub kind: TraceKind,
    pub field: String,

    pub value: Option<String>,
    pub error: Option<String>,
}

impl TraceEvent {
    pub fn now(seq: u64, container: &str, kind: TraceKind, field: &str) -> Self {
        Self {
            // A clock before the epoch only happens on a broken host; record 0.
            timestamp_ms: SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_millis())
                .unwrap_or(0),
            seq,
            container: container.to_string(),
            kind,
            field: field.to_string(),
            value: None,
            error: None,
        }
    }

    pub fn with_value(mut self, value: impl ToString) -> Self {
        self.value = Some(value.to_string());
        self
    }

    pub fn with_error(mut self, error: impl ToString) -> Self {
        self.error = Some(error.to_string());
        self
    }
}
