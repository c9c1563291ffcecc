//! # Chatstat
//!
//! A Rust library for parsing WhatsApp text exports and computing
//! descriptive statistics over them.
//!
//! ## Overview
//!
//! Chatstat turns a raw export (Android or iOS layout) into an immutable
//! [`MessageTable`] and offers a family of aggregations over it:
//! - **Headline counts** - messages, words, media, links
//! - **Timelines** - monthly and daily message counts
//! - **Activity** - weekday and month distributions, a weekday × hour heatmap
//! - **Rankings** - busiest users, most common words, emoji frequency
//!
//! Every aggregation takes a [`Selector`]: either the whole chat
//! ([`Selector::Overall`]) or one sender.
//!
//! ## Quick Start
//!
//! ```rust
//! use chatstat::prelude::*;
//!
//! let raw = "1/1/23, 10:00 AM - Alice: hello world\n\
//!            1/1/23, 10:01 AM - Bob: <Media omitted>";
//! let table = preprocess(raw);
//!
//! let stats = fetch_stats(&Selector::Overall, &table, &AnalysisConfig::default());
//! assert_eq!(stats.messages, 2);
//! assert_eq!(stats.media, 1);
//! ```
//!
//! ## Reading Files
//!
//! ```rust,no_run
//! use chatstat::config::{DateOrder, ParserConfig};
//! use chatstat::parser::WhatsAppParser;
//!
//! let parser = WhatsAppParser::with_config(
//!     ParserConfig::new().with_date_order(DateOrder::MonthFirst),
//! );
//! let table = parser.parse("chat.txt".as_ref())?;
//! println!("{} messages", table.len());
//! # Ok::<(), chatstat::ChatstatError>(())
//! ```
//!
//! ## Module Structure
//!
//! - [`parser`] - [`WhatsAppParser`](parser::WhatsAppParser) and [`preprocess`]
//! - [`parsing`] - Line lexing, timestamp parsing, date-order detection
//! - [`table`] - [`MessageTable`] and [`Selector`]
//! - [`message`] - [`Message`] and [`Sender`]
//! - [`core`] - Aggregations, the combined [`Report`](core::Report), renderers
//! - [`config`] - [`ParserConfig`](config::ParserConfig), [`AnalysisConfig`](config::AnalysisConfig), stop words
//! - [`format`] - Report output formats
//! - [`error`] - Unified error types ([`ChatstatError`], [`Result`])
//! - [`prelude`] - Convenient re-exports

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod format;
pub mod message;
pub mod parser;
pub mod parsing;
pub mod table;

// Re-export the main types at the crate root for convenience
pub use error::{ChatstatError, Result};
pub use message::{Message, Sender};
pub use parser::preprocess;
pub use table::{MessageTable, Selector};

/// Convenient re-exports for common usage.
///
/// Import everything you need with a single line:
///
/// ```rust
/// use chatstat::prelude::*;
/// ```
pub mod prelude {
    // Core data types
    pub use crate::message::{Message, Sender};
    pub use crate::table::{MessageTable, Selector};

    // Error types
    pub use crate::error::{ChatstatError, Result};

    // Parsing
    pub use crate::parser::{WhatsAppParser, preprocess};
    pub use crate::parsing::detect_date_order;

    // Configuration
    pub use crate::config::{AnalysisConfig, DateOrder, ParserConfig, StopWords};

    // Aggregations
    pub use crate::core::{
        Report, activity_heatmap, daily_timeline, emoji_helper, fetch_stats, month_activity_map,
        monthly_timeline, most_busy_users, most_common_words, week_activity_map,
    };

    // Output
    #[cfg(feature = "csv-output")]
    pub use crate::core::output::to_csv;
    #[cfg(feature = "json-output")]
    pub use crate::core::output::to_json;
    pub use crate::core::output::to_text;
    pub use crate::format::{OutputFormat, to_format_string};
}
