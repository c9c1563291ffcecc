//! WhatsApp export lexing utilities.
//!
//! Exports vary by platform and locale. Both layouts share the same shape:
//!
//! - Android: `15/01/2024, 10:30 - Sender: Message`
//! - iOS: `[1/15/24, 10:30:45 AM] Sender: Message`
//!
//! [`lex`] cuts the text into [`RawEntry`] chunks at every line that starts
//! with a stamp. Lines without a stamp continue the previous entry.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::DateOrder;
use crate::message::Sender;

// date: 1-2 digits, 1-2 digits, 2 or 4 digit year, separated by / . or -
// time: H:MM with optional :SS and optional AM/PM marker
static STAMP_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"^\x{200E}?(?:",
        r"\[(?P<bdate>\d{1,2}[/.\-]\d{1,2}[/.\-]\d{2,4}),?\s(?P<btime>\d{1,2}:\d{2}(?::\d{2})?(?:\s?[AaPp]\.?[Mm]\.?)?)\]\s?",
        r"|",
        r"(?P<date>\d{1,2}[/.\-]\d{1,2}[/.\-]\d{2,4}),?\s(?P<time>\d{1,2}:\d{2}(?::\d{2})?(?:\s?[AaPp]\.?[Mm]\.?)?)\s-\s",
        r")",
    ))
    .expect("valid regex")
});

static DATE_FIELDS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{1,2})[/.\-](\d{1,2})[/.\-](\d{2,4})$").expect("valid regex"));

/// One stamp-delimited chunk of an export, before timestamp parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawEntry<'a> {
    /// Date part of the stamp, as printed (`1/15/24`).
    pub date: &'a str,
    /// Time part of the stamp, as printed (`10:30:45 AM`).
    pub time: &'a str,
    /// Everything after the stamp, continuation lines included.
    pub payload: String,
}

/// Splits raw export text into stamp-delimited entries.
///
/// Text before the first stamp is discarded. Trailing blank lines are
/// trimmed from every payload.
///
/// # Example
///
/// ```rust
/// use chatstat::parsing::whatsapp::lex;
///
/// let entries = lex("1/1/23, 10:00 - Alice: hi\nsecond line\n1/1/23, 10:01 - Bob: yo");
/// assert_eq!(entries.len(), 2);
/// assert_eq!(entries[0].payload, "Alice: hi\nsecond line");
/// assert_eq!(entries[1].time, "10:01");
/// ```
pub fn lex(raw: &str) -> Vec<RawEntry<'_>> {
    let mut entries: Vec<RawEntry<'_>> = Vec::new();
    let mut orphans = 0usize;

    for line in raw.lines() {
        if let Some(caps) = STAMP_PATTERN.captures(line) {
            let date = caps.name("date").or_else(|| caps.name("bdate"));
            let time = caps.name("time").or_else(|| caps.name("btime"));
            let (Some(date), Some(time)) = (date, time) else {
                continue;
            };
            let stamp_end = caps.get(0).map_or(0, |m| m.end());

            if let Some(last) = entries.last_mut() {
                trim_trailing_blank(&mut last.payload);
            }
            entries.push(RawEntry {
                date: date.as_str(),
                time: time.as_str(),
                payload: line[stamp_end..].to_string(),
            });
        } else if let Some(last) = entries.last_mut() {
            last.payload.push('\n');
            last.payload.push_str(line);
        } else if !line.trim().is_empty() {
            orphans += 1;
        }
    }

    if let Some(last) = entries.last_mut() {
        trim_trailing_blank(&mut last.payload);
    }

    if orphans > 0 {
        tracing::debug!(lines = orphans, "discarded text before the first timestamp");
    }
    tracing::debug!(entries = entries.len(), "lexed export");

    entries
}

fn trim_trailing_blank(payload: &mut String) {
    let trimmed = payload.trim_end_matches(['\n', '\r']).len();
    payload.truncate(trimmed);
}

/// Date parsing format strings for chrono, by order and year width.
fn date_parse_formats(order: DateOrder, four_digit_year: bool) -> &'static [&'static str] {
    match (order, four_digit_year) {
        (DateOrder::DayFirst, false) => &["%d/%m/%y"],
        (DateOrder::DayFirst, true) => &["%d/%m/%Y"],
        (DateOrder::MonthFirst, false) => &["%m/%d/%y"],
        (DateOrder::MonthFirst, true) => &["%m/%d/%Y"],
    }
}

/// Time parsing format strings for chrono.
fn time_parse_formats(has_meridiem: bool) -> &'static [&'static str] {
    if has_meridiem {
        &["%I:%M:%S %p", "%I:%M %p"]
    } else {
        &["%H:%M:%S", "%H:%M"]
    }
}

/// Parses a stamp's date and time into a single timestamp.
///
/// 12-hour times need an AM/PM marker; without one the time is read as
/// 24-hour. Returns `None` for impossible dates or times.
///
/// # Example
///
/// ```rust
/// use chatstat::config::DateOrder;
/// use chatstat::parsing::whatsapp::parse_timestamp;
///
/// let ts = parse_timestamp("3/4/23", "1:05 PM", DateOrder::DayFirst).unwrap();
/// assert_eq!(ts.to_string(), "2023-04-03 13:05:00");
///
/// assert!(parse_timestamp("13/13/23", "10:00", DateOrder::DayFirst).is_none());
/// ```
pub fn parse_timestamp(date_str: &str, time_str: &str, order: DateOrder) -> Option<NaiveDateTime> {
    let date = parse_date(date_str, order)?;
    let time = parse_time(time_str)?;
    Some(date.and_time(time))
}

fn parse_date(date_str: &str, order: DateOrder) -> Option<NaiveDate> {
    let normalized: String = date_str
        .trim()
        .chars()
        .map(|c| if c == '.' || c == '-' { '/' } else { c })
        .collect();
    let year_len = normalized.rsplit('/').next().map_or(0, str::len);

    date_parse_formats(order, year_len == 4)
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(&normalized, fmt).ok())
}

fn parse_time(time_str: &str) -> Option<NaiveTime> {
    // U+202F and friends before the marker, "p.m." spellings
    let mut normalized = String::with_capacity(time_str.len() + 1);
    for c in time_str.trim().chars() {
        match c {
            '.' => {}
            c if c.is_whitespace() => {}
            c if c.is_ascii_alphabetic() => {
                if !normalized.ends_with(' ') && !normalized.ends_with(|p: char| p.is_ascii_alphabetic()) {
                    normalized.push(' ');
                }
                normalized.push(c.to_ascii_uppercase());
            }
            c => normalized.push(c),
        }
    }
    let has_meridiem = normalized.ends_with('M');

    time_parse_formats(has_meridiem)
        .iter()
        .find_map(|fmt| NaiveTime::parse_from_str(&normalized, fmt).ok())
}

/// Splits a payload into sender and body at the first `:` followed by
/// whitespace on the payload's first line.
///
/// Payloads without such a separator are system notifications; they get
/// [`Sender::Notification`] and keep the full payload as body.
///
/// # Example
///
/// ```rust
/// use chatstat::Sender;
/// use chatstat::parsing::whatsapp::split_sender;
///
/// assert_eq!(
///     split_sender("Alice: see you at 10:30"),
///     (Sender::user("Alice"), "see you at 10:30")
/// );
/// assert_eq!(
///     split_sender("Alice added Bob"),
///     (Sender::Notification, "Alice added Bob")
/// );
/// ```
pub fn split_sender(payload: &str) -> (Sender, &str) {
    let first_line_end = payload.find('\n').unwrap_or(payload.len());

    for (i, c) in payload[..first_line_end].char_indices() {
        if c != ':' {
            continue;
        }
        let rest = &payload[i + 1..];
        let followed_by_space = rest.is_empty() || rest.starts_with(char::is_whitespace);
        if !followed_by_space {
            continue;
        }

        let name = payload[..i].trim();
        if name.is_empty() {
            break;
        }
        let body = rest.strip_prefix(char::is_whitespace).unwrap_or(rest);
        return (Sender::user(name), body);
    }

    (Sender::Notification, payload)
}

/// Infers the date order from stamps whose day field exceeds 12.
///
/// Returns `None` when every stamp is ambiguous. The result is only a
/// suggestion: callers decide whether to use it.
///
/// # Example
///
/// ```rust
/// use chatstat::config::DateOrder;
/// use chatstat::parsing::whatsapp::detect_date_order;
///
/// let raw = "1/2/23, 10:00 - A: x\n25/2/23, 10:00 - A: y";
/// assert_eq!(detect_date_order(raw), Some(DateOrder::DayFirst));
/// assert_eq!(detect_date_order("1/2/23, 10:00 - A: x"), None);
/// ```
pub fn detect_date_order(raw: &str) -> Option<DateOrder> {
    for entry in lex(raw) {
        let Some(caps) = DATE_FIELDS.captures(entry.date) else {
            continue;
        };
        let first: u32 = caps[1].parse().ok()?;
        let second: u32 = caps[2].parse().ok()?;

        if first > 12 && second <= 12 {
            return Some(DateOrder::DayFirst);
        }
        if second > 12 && first <= 12 {
            return Some(DateOrder::MonthFirst);
        }
    }

    None
}
