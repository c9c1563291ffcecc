//! The parsed message table and sender selection.
//!
//! A [`MessageTable`] is built once per export and never mutated. The
//! aggregations read it through a [`Selector`], which narrows the rows to
//! one participant without copying them.
//!
//! # Example
//!
//! ```
//! use chatstat::parser::preprocess;
//! use chatstat::table::Selector;
//!
//! let table = preprocess(
//!     "01/02/2024, 09:00 - Alice: hi\n01/02/2024, 09:05 - Bob: hey\n01/02/2024, 09:06 - Alice: ok",
//! );
//!
//! assert_eq!(table.view(&Selector::Overall).count(), 3);
//! assert_eq!(table.view(&Selector::sender("Alice")).count(), 2);
//! assert_eq!(table.view(&"Carol".parse().unwrap()).count(), 0);
//! ```

use std::collections::BTreeSet;
use std::convert::Infallible;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Message;

/// Selector value meaning "every participant".
pub const OVERALL: &str = "Overall";

/// Which rows an aggregation looks at.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Selector {
    /// All rows, notifications included.
    #[default]
    Overall,
    /// Rows written by this participant. Never matches notifications.
    Sender(String),
}

impl Selector {
    pub fn sender(name: impl Into<String>) -> Self {
        Selector::Sender(name.into())
    }

    /// Returns `true` if this selector admits `msg`.
    pub fn matches(&self, msg: &Message) -> bool {
        match self {
            Selector::Overall => true,
            Selector::Sender(name) => msg.sender.name() == Some(name.as_str()),
        }
    }

    pub fn is_overall(&self) -> bool {
        matches!(self, Selector::Overall)
    }
}

impl std::fmt::Display for Selector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Selector::Overall => f.write_str(OVERALL),
            Selector::Sender(name) => f.write_str(name),
        }
    }
}

impl FromStr for Selector {
    type Err = Infallible;

    /// Exactly `"Overall"` selects everyone; anything else is a sender name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == OVERALL {
            Ok(Selector::Overall)
        } else {
            Ok(Selector::Sender(s.to_string()))
        }
    }
}

impl From<String> for Selector {
    fn from(s: String) -> Self {
        if s == OVERALL {
            Selector::Overall
        } else {
            Selector::Sender(s)
        }
    }
}

impl From<Selector> for String {
    fn from(selector: Selector) -> Self {
        selector.to_string()
    }
}

/// Ordered, immutable table of parsed messages.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MessageTable {
    rows: Vec<Message>,
}

impl MessageTable {
    /// Wraps rows in their source order.
    pub fn new(rows: Vec<Message>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[Message] {
        &self.rows
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Message> {
        self.rows.iter()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows admitted by `selector`, in source order.
    pub fn view<'a>(&'a self, selector: &'a Selector) -> impl Iterator<Item = &'a Message> + 'a {
        self.rows.iter().filter(move |msg| selector.matches(msg))
    }

    /// Distinct participant names, sorted. Notifications are excluded.
    pub fn senders(&self) -> Vec<&str> {
        let names: BTreeSet<&str> = self.rows.iter().filter_map(|m| m.sender.name()).collect();
        names.into_iter().collect()
    }

    /// `"Overall"` followed by [`senders`](Self::senders).
    pub fn selectable_users(&self) -> Vec<&str> {
        let mut users = Vec::with_capacity(self.rows.len().min(64) + 1);
        users.push(OVERALL);
        users.extend(self.senders());
        users
    }

    pub fn notification_count(&self) -> usize {
        self.rows.iter().filter(|m| m.is_notification()).count()
    }

    /// Returns `true` if `name` wrote at least one message.
    pub fn has_sender(&self, name: &str) -> bool {
        self.rows.iter().any(|m| m.sender.name() == Some(name))
    }
}

impl<'a> IntoIterator for &'a MessageTable {
    type Item = &'a Message;
    type IntoIter = std::slice::Iter<'a, Message>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::Sender;
    use chrono::NaiveDate;

    fn msg(sender: Sender, body: &str) -> Message {
        let ts = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        Message::new(ts, sender, body)
    }

    fn sample() -> MessageTable {
        MessageTable::new(vec![
            msg(Sender::user("Zed"), "a"),
            msg(Sender::Notification, "Zed added Amy"),
            msg(Sender::user("Amy"), "b"),
            msg(Sender::user("Zed"), "c"),
        ])
    }

    #[test]
    fn test_senders_sorted_without_notifications() {
        assert_eq!(sample().senders(), vec!["Amy", "Zed"]);
        assert_eq!(sample().selectable_users(), vec!["Overall", "Amy", "Zed"]);
    }

    #[test]
    fn test_view_by_sender() {
        let table = sample();
        let zed = Selector::sender("Zed");
        let bodies: Vec<&str> = table.view(&zed).map(|m| m.body.as_str()).collect();
        assert_eq!(bodies, vec!["a", "c"]);
    }

    #[test]
    fn test_notification_sentinel_is_not_selectable() {
        let table = sample();
        let sel = Selector::sender(crate::message::GROUP_NOTIFICATION);
        assert_eq!(table.view(&sel).count(), 0);
        assert_eq!(table.notification_count(), 1);
    }

    #[test]
    fn test_selector_from_str() {
        assert_eq!("Overall".parse::<Selector>().unwrap(), Selector::Overall);
        assert_eq!(
            "overall".parse::<Selector>().unwrap(),
            Selector::Sender("overall".to_string())
        );
        assert_eq!(
            "Alice".parse::<Selector>().unwrap(),
            Selector::Sender("Alice".to_string())
        );
        assert_eq!(Selector::sender("Bob").to_string(), "Bob");
    }

    #[test]
    fn test_selector_serde() {
        let json = serde_json::to_string(&Selector::Overall).unwrap();
        assert_eq!(json, r#""Overall""#);
        let back: Selector = serde_json::from_str(r#""Amy""#).unwrap();
        assert_eq!(back, Selector::sender("Amy"));
    }

    #[test]
    fn test_has_sender() {
        let table = sample();
        assert!(table.has_sender("Amy"));
        assert!(!table.has_sender("group_notification"));
    }
}
