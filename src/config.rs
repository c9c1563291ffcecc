//! Configuration types for the parser and the aggregations.
//!
//! Everything the engine would otherwise hard-code lives here and is passed
//! in explicitly: the date order used to read ambiguous stamps, the phrases
//! that mark system notices, the media placeholder and the stop-word list.
//!
//! # Example
//!
//! ```rust
//! use chatstat::config::{AnalysisConfig, DateOrder, ParserConfig, StopWords};
//!
//! let parser = ParserConfig::new().with_date_order(DateOrder::MonthFirst);
//! let analysis = AnalysisConfig::new()
//!     .with_stop_words(StopWords::parse("the\nand\nok"))
//!     .with_top_words(10);
//!
//! assert_eq!(parser.date_order, DateOrder::MonthFirst);
//! assert!(analysis.stop_words.contains("OK"));
//! ```

use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ChatstatError;

/// Placeholder WhatsApp writes instead of an attachment when exporting
/// "without media".
pub const MEDIA_OMITTED: &str = "<Media omitted>";

/// Phrases that mark a line as a system notice even when the export
/// printed a sender in front of it (iOS puts the group name there).
pub const DEFAULT_NOTIFICATION_PHRASES: &[&str] = &[
    "Messages and calls are end-to-end encrypted",
    "Messages to this group are now secured with end-to-end encryption",
];

const BUNDLED_STOP_WORDS: &str = include_str!("../resources/stop_words.txt");

/// Order of the day and month fields in an export's date stamp.
///
/// Stamps like `03/04/23` are structurally ambiguous, so the order is
/// always chosen up front instead of guessed per line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DateOrder {
    /// `DD/MM/YY` (most locales outside the US)
    #[default]
    DayFirst,
    /// `MM/DD/YY` (US locale)
    MonthFirst,
}

impl DateOrder {
    /// Returns all accepted names.
    pub fn all_names() -> &'static [&'static str] {
        &["day-first", "month-first"]
    }
}

impl std::fmt::Display for DateOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DateOrder::DayFirst => write!(f, "day-first"),
            DateOrder::MonthFirst => write!(f, "month-first"),
        }
    }
}

impl FromStr for DateOrder {
    type Err = ChatstatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "day-first" | "dmy" => Ok(DateOrder::DayFirst),
            "month-first" | "mdy" => Ok(DateOrder::MonthFirst),
            _ => Err(ChatstatError::invalid_date_order(s)),
        }
    }
}

/// Configuration for WhatsApp export parsing.
///
/// # Example
///
/// ```rust
/// use chatstat::config::{DateOrder, ParserConfig};
///
/// let config = ParserConfig::new()
///     .with_date_order(DateOrder::MonthFirst)
///     .with_notification_phrases(Vec::<String>::new());
/// assert!(config.notification_phrases.is_empty());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParserConfig {
    /// How to read the day and month fields (default: day-first)
    pub date_order: DateOrder,

    /// Bodies starting with one of these are tagged as notifications
    /// even if a sender was printed
    pub notification_phrases: Vec<String>,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            date_order: DateOrder::default(),
            notification_phrases: DEFAULT_NOTIFICATION_PHRASES
                .iter()
                .map(|p| (*p).to_string())
                .collect(),
        }
    }
}

impl ParserConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the date order.
    #[must_use]
    pub fn with_date_order(mut self, order: DateOrder) -> Self {
        self.date_order = order;
        self
    }

    /// Replaces the notification phrase list.
    #[must_use]
    pub fn with_notification_phrases<I, S>(mut self, phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.notification_phrases = phrases.into_iter().map(Into::into).collect();
        self
    }
}

/// Case-insensitive stop-word set used by word frequency analysis.
///
/// The default set is the bundled English/Hinglish list.
///
/// # Example
///
/// ```rust
/// use chatstat::config::StopWords;
///
/// let words = StopWords::parse("# filler\nHai\nthe  and");
/// assert!(words.contains("hai"));
/// assert!(words.contains("AND"));
/// assert_eq!(words.len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    /// An empty set; nothing is filtered.
    pub fn empty() -> Self {
        Self {
            words: HashSet::new(),
        }
    }

    /// Parses a word list: whitespace separated, `#` starts a comment line.
    pub fn parse(text: &str) -> Self {
        let words = text
            .lines()
            .filter(|line| !line.trim_start().starts_with('#'))
            .flat_map(str::split_whitespace)
            .map(str::to_lowercase)
            .collect();
        Self { words }
    }

    /// Loads a word list from a file.
    pub fn from_path(path: &Path) -> Result<Self, ChatstatError> {
        let bytes = fs::read(path)?;
        let text = String::from_utf8(bytes)
            .map_err(|e| ChatstatError::utf8(e, Some(path.to_path_buf())))?;
        Ok(Self::parse(&text))
    }

    /// Returns `true` if `word` is a stop word, ignoring case.
    pub fn contains(&self, word: &str) -> bool {
        if self.words.contains(word) {
            return true;
        }
        self.words.contains(&word.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for StopWords {
    fn default() -> Self {
        Self::parse(BUNDLED_STOP_WORDS)
    }
}

impl<S: Into<String>> FromIterator<S> for StopWords {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let words = iter.into_iter().map(|w| w.into().to_lowercase()).collect();
        Self { words }
    }
}

/// Constants and limits used by the aggregation functions.
///
/// # Example
///
/// ```rust
/// use chatstat::config::AnalysisConfig;
///
/// let config = AnalysisConfig::new().with_top_users(3);
/// assert_eq!(config.media_placeholder, "<Media omitted>");
/// assert_eq!(config.top_words, 20);
/// assert_eq!(config.top_users, 3);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Body text standing in for an attachment (default: `<Media omitted>`)
    pub media_placeholder: String,

    /// Words ignored by [`most_common_words`](crate::core::words::most_common_words)
    pub stop_words: StopWords,

    /// Length of the top-words ranking (default: 20)
    pub top_words: usize,

    /// Length of the busiest-users ranking (default: 5)
    pub top_users: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            media_placeholder: MEDIA_OMITTED.to_string(),
            stop_words: StopWords::default(),
            top_words: 20,
            top_users: 5,
        }
    }
}

impl AnalysisConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the media placeholder text.
    #[must_use]
    pub fn with_media_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.media_placeholder = placeholder.into();
        self
    }

    /// Sets the stop-word list.
    #[must_use]
    pub fn with_stop_words(mut self, stop_words: StopWords) -> Self {
        self.stop_words = stop_words;
        self
    }

    /// Sets how many words the top-words ranking keeps.
    #[must_use]
    pub fn with_top_words(mut self, n: usize) -> Self {
        self.top_words = n;
        self
    }

    /// Sets how many users the busiest-users ranking keeps.
    #[must_use]
    pub fn with_top_users(mut self, n: usize) -> Self {
        self.top_users = n;
        self
    }

    /// Returns `true` if `body` is the media placeholder.
    pub fn is_media(&self, body: &str) -> bool {
        body.trim() == self.media_placeholder
    }
}
