//! Aggregations over a parsed [`MessageTable`](crate::table::MessageTable).
//!
//! This module contains:
//! - [`stats`] - Headline counts and the busiest-user ranking
//! - [`timeline`] - Monthly and daily series
//! - [`activity`] - Weekday/month distributions and the heatmap
//! - [`words`] - Word frequency with stop-word filtering
//! - [`emoji`] - Emoji frequency
//! - [`report`] - Everything at once
//!
//! Every function borrows the table and returns fresh values; none of them
//! can fail. An unknown sender simply yields empty or all-zero results.
//!
//! # Quick Start
//!
//! ```rust
//! use chatstat::config::AnalysisConfig;
//! use chatstat::core::{fetch_stats, monthly_timeline};
//! use chatstat::parser::preprocess;
//! use chatstat::table::Selector;
//!
//! let table = preprocess("01/01/2024, 09:00 - Alice: hi\n02/02/2024, 09:00 - Bob: hey");
//! let stats = fetch_stats(&Selector::Overall, &table, &AnalysisConfig::default());
//! let months: usize = monthly_timeline(&Selector::Overall, &table)
//!     .iter()
//!     .map(|p| p.count)
//!     .sum();
//!
//! assert_eq!(stats.messages, months);
//! ```

pub mod activity;
pub mod counter;
pub mod emoji;
pub mod output;
pub mod report;
pub mod stats;
pub mod timeline;
pub mod words;

pub use activity::{
    ActivityMap, Bucket, Heatmap, activity_heatmap, month_activity_map, period_label,
    week_activity_map,
};
pub use counter::Counter;
pub use emoji::{emoji_helper, is_emoji};
pub use report::Report;
pub use stats::{BusyUsers, Stats, UserShare, fetch_stats, most_busy_users};
pub use timeline::{DailyPoint, MonthlyPoint, daily_timeline, monthly_timeline};
pub use words::most_common_words;
