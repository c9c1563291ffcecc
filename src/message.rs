//! Typed message record produced by the parser.
//!
//! A [`Message`] carries the export's timestamp, its [`Sender`] and the raw
//! body, plus calendar columns derived once at construction time so that
//! every aggregation can bucket records without re-deriving them.
//!
//! # Examples
//!
//! ```
//! use chatstat::{Message, Sender};
//! use chrono::NaiveDate;
//!
//! let ts = NaiveDate::from_ymd_opt(2023, 1, 1)
//!     .unwrap()
//!     .and_hms_opt(22, 15, 0)
//!     .unwrap();
//! let msg = Message::new(ts, Sender::user("Alice"), "hello");
//!
//! assert_eq!(msg.day_name, "Sunday");
//! assert_eq!(msg.month_name, "January");
//! assert_eq!(msg.hour, 22);
//! assert_eq!(msg.sender.as_str(), "Alice");
//! ```

use chrono::{Datelike, Month, NaiveDate, NaiveDateTime, Timelike, Weekday};
use serde::{Serialize, Serializer};

/// Label used for system notification rows.
pub const GROUP_NOTIFICATION: &str = "group_notification";

/// Weekday names, Monday first.
pub const WEEKDAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Month names, January first.
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Author of a message.
///
/// System lines ("X added Y", the encryption notice, ...) have no human
/// author and are tagged [`Sender::Notification`] instead of being
/// attributed to a participant.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Sender {
    /// A chat participant, by display name. Never empty.
    User(String),
    /// A system notification.
    Notification,
}

impl Sender {
    /// Creates a user sender. Blank names become [`Sender::Notification`].
    pub fn user(name: impl Into<String>) -> Self {
        let name = name.into();
        if name.trim().is_empty() {
            Sender::Notification
        } else {
            Sender::User(name)
        }
    }

    /// Returns the display name, or [`GROUP_NOTIFICATION`] for notifications.
    pub fn as_str(&self) -> &str {
        match self {
            Sender::User(name) => name,
            Sender::Notification => GROUP_NOTIFICATION,
        }
    }

    /// Returns the participant name, `None` for notifications.
    pub fn name(&self) -> Option<&str> {
        match self {
            Sender::User(name) => Some(name),
            Sender::Notification => None,
        }
    }

    pub fn is_notification(&self) -> bool {
        matches!(self, Sender::Notification)
    }
}

impl std::fmt::Display for Sender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Sender {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// One parsed chat entry with its derived calendar columns.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Message {
    /// Wall-clock time printed in the export (exports carry no timezone).
    pub timestamp: NaiveDateTime,

    /// Author, or the notification sentinel.
    pub sender: Sender,

    /// Message text. Multi-line messages keep their `\n` separators.
    pub body: String,

    pub date_only: NaiveDate,
    pub year: i32,
    /// 1-based month number.
    pub month_num: u32,
    pub month_name: &'static str,
    pub day: u32,
    pub day_name: &'static str,
    pub hour: u32,
    pub minute: u32,
}

impl Message {
    /// Creates a message and derives its calendar columns.
    pub fn new(timestamp: NaiveDateTime, sender: Sender, body: impl Into<String>) -> Self {
        let date_only = timestamp.date();
        let month_num = timestamp.month();
        Self {
            timestamp,
            sender,
            body: body.into(),
            date_only,
            year: timestamp.year(),
            month_num,
            month_name: MONTH_NAMES[month_num as usize - 1],
            day: timestamp.day(),
            day_name: WEEKDAY_NAMES[timestamp.weekday().num_days_from_monday() as usize],
            hour: timestamp.hour(),
            minute: timestamp.minute(),
        }
    }

    pub fn weekday(&self) -> Weekday {
        self.timestamp.weekday()
    }

    pub fn month(&self) -> Month {
        // month_num is always 1..=12
        Month::try_from(self.month_num as u8).unwrap_or(Month::January)
    }

    pub fn is_notification(&self) -> bool {
        self.sender.is_notification()
    }
}
