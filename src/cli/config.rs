use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

use crate::delegate::identifier::{Identifier, new_identifier};

// ============================================================================
// CLI Argument Parsing (clap derive)
// ============================================================================

#[derive(Parser, Debug)]
#[command(
    name = "field-delegate",
    version,
    about = "Bind and read validated delegated fields"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to config file (default: field-delegate.yaml in current dir)
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Append JSONL trace events to this file
    #[arg(long, global = true)]
    pub trace: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Bind a single field and print its delegated value
    Read {
        /// Field name to bind (image or text)
        #[arg(long)]
        field: String,

        /// Image sub-identifier (default: 100)
        #[arg(long)]
        image_id: Option<String>,

        /// Text sub-identifier (default: 101)
        #[arg(long)]
        text_id: Option<String>,
    },

    /// Assemble containers from layout YAML and report their values
    Resolve {
        /// Path to a layout YAML file or a directory of layout files
        #[arg(long)]
        layout: String,

        /// Output format: console or json
        #[arg(long)]
        format: Option<String>,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Validate layouts without printing values
    Check {
        /// Path to a layout YAML file or a directory of layout files
        #[arg(long)]
        layout: String,
    },
}

// ============================================================================
// Config File Model (optional YAML)
// ============================================================================

/// Optional YAML config file: `field-delegate.yaml`
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub trace: TraceConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_console")]
    pub format: String,

    pub path: Option<String>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: "console".to_string(),
            path: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TraceConfig {
    pub path: Option<String>,
}

fn default_console() -> String { "console".to_string() }

// ============================================================================
// Config File Loading
// ============================================================================

/// Load config from a YAML file. Returns defaults if file is missing or malformed.
pub fn load_config(path: Option<&str>) -> AppConfig {
    let config_path = path.unwrap_or("field-delegate.yaml");
    match std::fs::read_to_string(config_path) {
        Ok(content) => serde_yaml::from_str(&content).unwrap_or_default(),
        Err(_) => AppConfig::default(),
    }
}

// ============================================================================
// Resolution helpers (CLI > config > default)
// ============================================================================

/// Fill whichever sub-identifier was not given from the canonical identifier.
pub fn build_identifier(image_id: Option<&str>, text_id: Option<&str>) -> Identifier {
    let canonical = new_identifier();
    Identifier::new(
        image_id.unwrap_or(canonical.image_id()),
        text_id.unwrap_or(canonical.text_id()),
    )
}

pub fn resolve_format<'a>(cli_format: Option<&'a str>, config: &'a AppConfig) -> &'a str {
    cli_format.unwrap_or(config.output.format.as_str())
}

pub fn resolve_output_path<'a>(
    cli_output: Option<&'a str>,
    config: &'a AppConfig,
) -> Option<&'a str> {
    cli_output.or(config.output.path.as_deref())
}

pub fn resolve_trace_path<'a>(
    cli_trace: Option<&'a str>,
    config: &'a AppConfig,
) -> Option<&'a str> {
    cli_trace.or(config.trace.path.as_deref())
}
