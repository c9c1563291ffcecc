//! All statistics for one selector, computed in one call.
//!
//! With the `parallel` feature the aggregations run on the rayon thread
//! pool. They only read the table, so the results are identical to the
//! sequential build.

use serde::Serialize;

use crate::config::AnalysisConfig;
use crate::core::activity::{
    ActivityMap, Heatmap, activity_heatmap, month_activity_map, week_activity_map,
};
use crate::core::emoji::emoji_helper;
use crate::core::stats::{BusyUsers, Stats, fetch_stats, most_busy_users};
use crate::core::timeline::{DailyPoint, MonthlyPoint, daily_timeline, monthly_timeline};
use crate::core::words::most_common_words;
use crate::table::{MessageTable, Selector};

/// Every aggregation result for one selector.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub selector: Selector,
    pub stats: Stats,
    pub monthly_timeline: Vec<MonthlyPoint>,
    pub daily_timeline: Vec<DailyPoint>,
    pub week_activity: ActivityMap,
    pub month_activity: ActivityMap,
    pub heatmap: Heatmap,
    /// Only computed for [`Selector::Overall`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub busy_users: Option<BusyUsers>,
    pub common_words: Vec<(String, usize)>,
    pub emoji: Vec<(String, usize)>,
}

impl Report {
    /// Runs every aggregation for `selector`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use chatstat::config::AnalysisConfig;
    /// use chatstat::core::Report;
    /// use chatstat::parser::preprocess;
    /// use chatstat::table::Selector;
    ///
    /// let table = preprocess("01/01/2024, 09:00 - Alice: hi 👋");
    /// let report = Report::build(&Selector::Overall, &table, &AnalysisConfig::default());
    ///
    /// assert_eq!(report.stats.messages, 1);
    /// assert_eq!(report.emoji[0].0, "👋");
    /// assert!(report.busy_users.is_some());
    /// ```
    #[cfg(not(feature = "parallel"))]
    pub fn build(selector: &Selector, table: &MessageTable, config: &AnalysisConfig) -> Self {
        Self {
            selector: selector.clone(),
            stats: fetch_stats(selector, table, config),
            monthly_timeline: monthly_timeline(selector, table),
            daily_timeline: daily_timeline(selector, table),
            week_activity: week_activity_map(selector, table),
            month_activity: month_activity_map(selector, table),
            heatmap: activity_heatmap(selector, table),
            busy_users: selector
                .is_overall()
                .then(|| most_busy_users(table, config)),
            common_words: most_common_words(selector, table, config),
            emoji: emoji_helper(selector, table),
        }
    }

    /// Runs every aggregation for `selector` on the rayon pool.
    #[cfg(feature = "parallel")]
    pub fn build(selector: &Selector, table: &MessageTable, config: &AnalysisConfig) -> Self {
        let ((stats, (monthly, daily)), ((week, month), heatmap)) = rayon::join(
            || {
                rayon::join(
                    || fetch_stats(selector, table, config),
                    || {
                        rayon::join(
                            || monthly_timeline(selector, table),
                            || daily_timeline(selector, table),
                        )
                    },
                )
            },
            || {
                rayon::join(
                    || {
                        rayon::join(
                            || week_activity_map(selector, table),
                            || month_activity_map(selector, table),
                        )
                    },
                    || activity_heatmap(selector, table),
                )
            },
        );
        let (busy_users, (common_words, emoji)) = rayon::join(
            || {
                selector
                    .is_overall()
                    .then(|| most_busy_users(table, config))
            },
            || {
                rayon::join(
                    || most_common_words(selector, table, config),
                    || emoji_helper(selector, table),
                )
            },
        );

        Self {
            selector: selector.clone(),
            stats,
            monthly_timeline: monthly,
            daily_timeline: daily,
            week_activity: week,
            month_activity: month,
            heatmap,
            busy_users,
            common_words,
            emoji,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::preprocess;

    const CHAT: &str = "01/01/2024, 09:00 - Alice: pizza tonight? 🍕\n\
                        01/01/2024, 09:05 - Bob: pizza yes 🍕🍕\n\
                        02/01/2024, 21:00 - Alice: <Media omitted>\n\
                        02/01/2024, 21:01 - Bob left";

    #[test]
    fn test_build_overall() {
        let table = preprocess(CHAT);
        let report = Report::build(&Selector::Overall, &table, &AnalysisConfig::default());

        assert_eq!(report.stats.messages, 4);
        assert_eq!(report.stats.media, 1);
        assert_eq!(report.monthly_timeline.len(), 1);
        assert_eq!(report.daily_timeline.len(), 2);
        assert_eq!(report.week_activity.total(), 4);
        assert_eq!(report.heatmap.total(), 4);
        assert_eq!(report.busy_users.as_ref().map(|b| b.shares.len()), Some(2));
        assert_eq!(report.common_words[0], ("pizza".to_string(), 2));
        assert_eq!(report.emoji, vec![("🍕".to_string(), 3)]);
    }

    #[test]
    fn test_build_single_sender_skips_busy_users() {
        let table = preprocess(CHAT);
        let report = Report::build(&Selector::sender("Bob"), &table, &AnalysisConfig::default());
        assert!(report.busy_users.is_none());
        assert_eq!(report.stats.messages, 1);
    }

    #[test]
    fn test_build_matches_individual_functions() {
        let table = preprocess(CHAT);
        let config = AnalysisConfig::default();
        let selector = Selector::Overall;
        let report = Report::build(&selector, &table, &config);

        assert_eq!(report.stats, fetch_stats(&selector, &table, &config));
        assert_eq!(report.heatmap, activity_heatmap(&selector, &table));
        assert_eq!(report.common_words, most_common_words(&selector, &table, &config));
    }

    #[test]
    fn test_report_serializes() {
        let table = preprocess(CHAT);
        let report = Report::build(&Selector::sender("Alice"), &table, &AnalysisConfig::default());
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["selector"], "Alice");
        assert!(json.get("busy_users").is_none());
        assert_eq!(json["week_activity"].as_array().map(Vec::len), Some(7));
    }
}
