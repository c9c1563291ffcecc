//! Report output formats.
//!
//! # Example
//!
//! ```rust
//! use chatstat::format::{OutputFormat, to_format_string};
//! use chatstat::config::AnalysisConfig;
//! use chatstat::core::Report;
//! use chatstat::parser::preprocess;
//! use chatstat::table::Selector;
//!
//! let table = preprocess("01/01/2024, 09:00 - Alice: hi");
//! let report = Report::build(&Selector::Overall, &table, &AnalysisConfig::default());
//!
//! let text = to_format_string(&report, OutputFormat::Text)?;
//! assert!(text.contains("Alice"));
//! # Ok::<(), chatstat::ChatstatError>(())
//! ```

use serde::{Deserialize, Serialize};

use crate::core::output;
use crate::core::report::Report;
use crate::error::ChatstatError;

/// How a [`Report`] is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum OutputFormat {
    /// Human-readable summary (default)
    #[default]
    Text,

    /// Pretty-printed JSON, for feeding a display layer
    Json,
}

impl OutputFormat {
    /// Returns all supported format names.
    pub fn all_names() -> &'static [&'static str] {
        &["text", "json"]
    }

    /// Returns the MIME type for this format.
    pub fn mime_type(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text/plain",
            OutputFormat::Json => "application/json",
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "Text"),
            OutputFormat::Json => write!(f, "JSON"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!(
                "Unknown format: '{}'. Expected one of: {}",
                s,
                OutputFormat::all_names().join(", ")
            )),
        }
    }
}

/// Renders a report in the given format.
///
/// # Errors
///
/// Returns an error if JSON is requested without the `json-output`
/// feature, or if serialization fails.
pub fn to_format_string(report: &Report, format: OutputFormat) -> Result<String, ChatstatError> {
    match format {
        OutputFormat::Text => Ok(output::to_text(report)),
        #[cfg(feature = "json-output")]
        OutputFormat::Json => output::to_json(report),
        #[cfg(not(feature = "json-output"))]
        OutputFormat::Json => Err(ChatstatError::Io(std::io::Error::new(
            std::io::ErrorKind::Unsupported,
            "JSON output requires the 'json-output' feature to be enabled",
        ))),
    }
}
