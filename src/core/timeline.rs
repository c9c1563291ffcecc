//! Monthly and daily message-count series.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::message::MONTH_NAMES;
use crate::table::{MessageTable, Selector};

/// One month of the monthly timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyPoint {
    /// Position in the chronological series, from 0.
    pub index: usize,
    pub year: i32,
    pub month_num: u32,
    /// `"MonthName-Year"`, e.g. `"January-2023"`.
    pub label: String,
    pub count: usize,
}

/// One calendar day of the daily timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyPoint {
    pub date: NaiveDate,
    pub count: usize,
}

/// Messages per calendar month, oldest first. Months without messages
/// are absent.
///
/// # Example
///
/// ```rust
/// use chatstat::core::monthly_timeline;
/// use chatstat::parser::preprocess;
/// use chatstat::table::Selector;
///
/// let table = preprocess(
///     "05/02/2023, 10:00 - A: x\n31/12/2022, 10:00 - A: y\n06/02/2023, 10:00 - A: z",
/// );
/// let timeline = monthly_timeline(&Selector::Overall, &table);
///
/// let labels: Vec<&str> = timeline.iter().map(|p| p.label.as_str()).collect();
/// assert_eq!(labels, vec!["December-2022", "February-2023"]);
/// assert_eq!(timeline[1].count, 2);
/// ```
pub fn monthly_timeline(selector: &Selector, table: &MessageTable) -> Vec<MonthlyPoint> {
    let mut months: BTreeMap<(i32, u32), usize> = BTreeMap::new();
    for msg in table.view(selector) {
        *months.entry((msg.year, msg.month_num)).or_default() += 1;
    }

    months
        .into_iter()
        .enumerate()
        .map(|(index, ((year, month_num), count))| MonthlyPoint {
            index,
            year,
            month_num,
            label: format!("{}-{}", MONTH_NAMES[month_num as usize - 1], year),
            count,
        })
        .collect()
}

/// Messages per calendar day, oldest first. Days without messages are
/// absent.
pub fn daily_timeline(selector: &Selector, table: &MessageTable) -> Vec<DailyPoint> {
    let mut days: BTreeMap<NaiveDate, usize> = BTreeMap::new();
    for msg in table.view(selector) {
        *days.entry(msg.date_only).or_default() += 1;
    }

    days.into_iter()
        .map(|(date, count)| DailyPoint { date, count })
        .collect()
}
