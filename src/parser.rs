//! WhatsApp TXT export parser.
//!
//! Turns the raw text of an export into a [`MessageTable`]. Parsing never
//! fails on content: entries whose stamp is not a real date are dropped,
//! lines without a `sender: ` prefix become notification rows, and an
//! empty file yields an empty table.
//!
//! # Example
//!
//! ```rust
//! use chatstat::parser::preprocess;
//!
//! let table = preprocess("1/1/23, 10:00 AM - Alice: hello world\n1/1/23, 10:02 AM - Alice joined");
//! assert_eq!(table.len(), 2);
//! assert_eq!(table.senders(), vec!["Alice"]);
//! ```

use std::fs;
use std::path::Path;

use crate::Message;
use crate::config::ParserConfig;
use crate::error::ChatstatError;
use crate::message::Sender;
use crate::parsing::whatsapp::{lex, parse_timestamp, split_sender};
use crate::table::MessageTable;

/// Parses export text with the default [`ParserConfig`] (day-first dates).
pub fn preprocess(raw_text: &str) -> MessageTable {
    WhatsAppParser::new().parse_str(raw_text)
}

/// Parser for WhatsApp TXT exports.
///
/// # Example
///
/// ```rust,no_run
/// use chatstat::config::{DateOrder, ParserConfig};
/// use chatstat::parser::WhatsAppParser;
///
/// let parser = WhatsAppParser::with_config(
///     ParserConfig::new().with_date_order(DateOrder::MonthFirst),
/// );
/// let table = parser.parse("whatsapp_chat.txt".as_ref())?;
/// # Ok::<(), chatstat::ChatstatError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct WhatsAppParser {
    config: ParserConfig,
}

impl WhatsAppParser {
    /// Creates a new parser with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a parser with custom configuration.
    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Reads and parses an export file. The file must be UTF-8.
    pub fn parse(&self, path: &Path) -> Result<MessageTable, ChatstatError> {
        let bytes = fs::read(path)?;
        let content = String::from_utf8(bytes)
            .map_err(|e| ChatstatError::utf8(e, Some(path.to_path_buf())))?;
        Ok(self.parse_str(&content))
    }

    /// Parses export text held in memory.
    pub fn parse_str(&self, content: &str) -> MessageTable {
        let entries = lex(content);
        let mut messages: Vec<Message> = Vec::with_capacity(entries.len());
        let mut dropped = 0usize;

        for entry in &entries {
            let Some(timestamp) = parse_timestamp(entry.date, entry.time, self.config.date_order)
            else {
                tracing::debug!(
                    date = entry.date,
                    time = entry.time,
                    order = %self.config.date_order,
                    "dropping entry with unparseable timestamp"
                );
                dropped += 1;
                continue;
            };

            let (sender, body) = split_sender(&entry.payload);
            let sender = if self.is_notification_phrase(body) {
                Sender::Notification
            } else {
                sender
            };

            messages.push(Message::new(timestamp, sender, body));
        }

        if messages.is_empty() && !content.trim().is_empty() {
            tracing::warn!(
                entries = entries.len(),
                "no messages recognised; is this a WhatsApp export with the selected date order?"
            );
        }
        tracing::info!(messages = messages.len(), dropped, "parsed WhatsApp export");

        MessageTable::new(messages)
    }

    fn is_notification_phrase(&self, body: &str) -> bool {
        let body = body.trim_start_matches(['\u{200E}', ' ']);
        self.config
            .notification_phrases
            .iter()
            .any(|phrase| body.starts_with(phrase.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DateOrder;

    #[test]
    fn test_preprocess_scenario() {
        let raw = "1/1/23, 10:00 AM - Alice: hello world\n\
                   1/1/23, 10:01 AM - Bob: <Media omitted>\n\
                   1/1/23, 10:02 AM - Alice joined";
        let table = preprocess(raw);

        assert_eq!(table.len(), 3);
        assert_eq!(table.senders(), vec!["Alice", "Bob"]);
        assert!(table.rows()[2].is_notification());
        assert_eq!(table.rows()[2].body, "Alice joined");
        assert_eq!(table.rows()[0].body, "hello world");
        assert_eq!(table.rows()[0].day_name, "Sunday");
    }

    #[test]
    fn test_multiline_body() {
        let raw = "12/03/2024, 09:15 - Alice: line one\nline two\n12/03/2024, 09:16 - Bob: ok";
        let table = preprocess(raw);
        assert_eq!(table.len(), 2);
        assert_eq!(table.rows()[0].body, "line one\nline two");
        assert_eq!(table.rows()[0].month_name, "March");
    }

    #[test]
    fn test_malformed_entries_dropped() {
        let raw = "31/02/23, 10:00 - Alice: impossible date\n\
                   continuation of the dropped entry\n\
                   01/03/23, 10:00 - Bob: fine";
        let table = preprocess(raw);
        assert_eq!(table.len(), 1);
        assert_eq!(table.rows()[0].body, "fine");
    }

    #[test]
    fn test_month_first_config() {
        let raw = "[1/15/24, 10:30:45 PM] Alice: Hello";
        assert!(preprocess(raw).is_empty());

        let parser =
            WhatsAppParser::with_config(ParserConfig::new().with_date_order(DateOrder::MonthFirst));
        let table = parser.parse_str(raw);
        assert_eq!(table.len(), 1);
        assert_eq!(table.rows()[0].hour, 22);
        assert_eq!(table.rows()[0].day, 15);
    }

    #[test]
    fn test_encryption_notice_with_sender_is_notification() {
        let raw = "[15.01.24, 10:30:00] Family: Messages and calls are end-to-end encrypted. No one outside of this chat can read them.\n\
                   [15.01.24, 10:31:00] Bob: hi";
        let table = preprocess(raw);
        assert_eq!(table.len(), 2);
        assert!(table.rows()[0].is_notification());
        assert_eq!(table.senders(), vec!["Bob"]);
    }

    #[test]
    fn test_notification_phrases_can_be_disabled() {
        let raw = "[15.01.24, 10:30:00] Family: Messages and calls are end-to-end encrypted.";
        let parser = WhatsAppParser::with_config(
            ParserConfig::new().with_notification_phrases(Vec::<String>::new()),
        );
        let table = parser.parse_str(raw);
        assert_eq!(table.senders(), vec!["Family"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(preprocess("").is_empty());
    }

    #[test]
    fn test_parse_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chat.txt");
        fs::write(&path, "01/01/2024, 08:00 - Alice: hi\n").unwrap();

        let table = WhatsAppParser::new().parse(&path).unwrap();
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_parse_non_utf8_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("binary.txt");
        fs::write(&path, [0xff, 0xfe, 0x00, 0x41]).unwrap();

        let err = WhatsAppParser::new().parse(&path).unwrap_err();
        assert!(err.is_utf8());
    }

    #[test]
    fn test_parse_missing_file() {
        let err = WhatsAppParser::new()
            .parse(Path::new("/nonexistent/chat.txt"))
            .unwrap_err();
        assert!(err.is_io());
    }
}
