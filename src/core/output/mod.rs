//! Renderers for reports and the parsed table.
//!
//! - [`to_text`] - Human-readable report (always available)
//! - [`to_json`] - Report as pretty JSON - requires `json-output` feature
//! - [`to_csv`] - Message table with derived columns - requires `csv-output` feature
//!
//! # Example
//!
//! ```rust
//! use chatstat::config::AnalysisConfig;
//! use chatstat::core::Report;
//! use chatstat::core::output::to_text;
//! use chatstat::parser::preprocess;
//! use chatstat::table::Selector;
//!
//! let table = preprocess("01/01/2024, 09:00 - Alice: hi");
//! let report = Report::build(&Selector::Overall, &table, &AnalysisConfig::default());
//!
//! assert!(to_text(&report).contains("Total Messages"));
//! ```

#[cfg(feature = "csv-output")]
mod csv_writer;
#[cfg(feature = "json-output")]
mod json_writer;
mod text;

#[cfg(feature = "csv-output")]
pub use csv_writer::to_csv;
#[cfg(feature = "json-output")]
pub use json_writer::to_json;
pub use text::to_text;
