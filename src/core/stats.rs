//! Headline counts and the busiest-participant ranking.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::config::AnalysisConfig;
use crate::core::counter::Counter;
use crate::table::{MessageTable, Selector};

static URL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)\b(?:https?://|www\.)[^\s<>"]+"#).expect("valid regex")
});

/// Summary counts for one selector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Stats {
    /// Rows in the view, notifications included.
    pub messages: usize,
    /// Whitespace-separated tokens in participant messages, media excluded.
    pub words: usize,
    /// Messages whose body is the media placeholder.
    pub media: usize,
    /// URLs found across all bodies; one message may hold several.
    pub links: usize,
}

/// Counts messages, words, media and links for `selector`.
///
/// # Example
///
/// ```rust
/// use chatstat::config::AnalysisConfig;
/// use chatstat::core::fetch_stats;
/// use chatstat::parser::preprocess;
/// use chatstat::table::Selector;
///
/// let table = preprocess(
///     "1/1/23, 10:00 - Alice: see https://a.example and www.b.example\n\
///      1/1/23, 10:01 - Bob: <Media omitted>",
/// );
/// let stats = fetch_stats(&Selector::Overall, &table, &AnalysisConfig::default());
///
/// assert_eq!(stats.messages, 2);
/// assert_eq!(stats.words, 4);
/// assert_eq!(stats.media, 1);
/// assert_eq!(stats.links, 2);
/// ```
pub fn fetch_stats(selector: &Selector, table: &MessageTable, config: &AnalysisConfig) -> Stats {
    let mut stats = Stats::default();

    for msg in table.view(selector) {
        stats.messages += 1;
        stats.links += URL_PATTERN.find_iter(&msg.body).count();

        if msg.is_notification() {
            continue;
        }
        if config.is_media(&msg.body) {
            stats.media += 1;
        } else {
            stats.words += msg.body.split_whitespace().count();
        }
    }

    stats
}

/// One row of the per-participant share table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserShare {
    pub user: String,
    pub count: usize,
    /// Share of all participant messages, rounded to two decimals.
    pub percent: f64,
}

/// Result of [`most_busy_users`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BusyUsers {
    /// The first `top_users` participants by message count.
    pub top: Vec<(String, usize)>,
    /// Every participant with count and share.
    pub shares: Vec<UserShare>,
}

impl BusyUsers {
    pub fn is_empty(&self) -> bool {
        self.shares.is_empty()
    }
}

/// Ranks participants by message count over the whole table.
///
/// Notification rows are not counted and do not contribute to the total
/// the percentages are taken from. Ties keep first-appearance order.
pub fn most_busy_users(table: &MessageTable, config: &AnalysisConfig) -> BusyUsers {
    let counter: Counter<&str> = table.iter().filter_map(|m| m.sender.name()).collect();
    let total = counter.total();
    let ranked = counter.into_ranked();

    let shares = ranked
        .iter()
        .map(|&(user, count)| UserShare {
            user: user.to_string(),
            count,
            percent: round2(count as f64 * 100.0 / total as f64),
        })
        .collect();

    let top = ranked
        .into_iter()
        .take(config.top_users)
        .map(|(user, count)| (user.to_string(), count))
        .collect();

    BusyUsers { top, shares }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
