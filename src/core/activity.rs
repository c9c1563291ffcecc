//! Weekday and month distributions, and the weekday × hour heatmap.
//!
//! All buckets are always present and zero-filled, so a view with no
//! messages still yields a full (all-zero) map.

use serde::Serialize;

use crate::message::{MONTH_NAMES, WEEKDAY_NAMES};
use crate::table::{MessageTable, Selector};

/// A labelled count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Bucket {
    pub label: &'static str,
    pub count: usize,
}

/// Message counts over a fixed set of categories, in calendar order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ActivityMap {
    buckets: Vec<Bucket>,
}

impl ActivityMap {
    fn zeroed(labels: &[&'static str]) -> Self {
        Self {
            buckets: labels
                .iter()
                .map(|&label| Bucket { label, count: 0 })
                .collect(),
        }
    }

    /// Count for `label`, `None` if the label is not a bucket.
    pub fn get(&self, label: &str) -> Option<usize> {
        self.buckets
            .iter()
            .find(|b| b.label == label)
            .map(|b| b.count)
    }

    /// Buckets in calendar order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, usize)> + '_ {
        self.buckets.iter().map(|b| (b.label, b.count))
    }

    /// Buckets by count descending; equal counts keep calendar order.
    pub fn ranked(&self) -> Vec<(&'static str, usize)> {
        let mut ranked: Vec<_> = self.iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }

    pub fn total(&self) -> usize {
        self.buckets.iter().map(|b| b.count).sum()
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

/// Messages per weekday, Monday to Sunday.
///
/// # Example
///
/// ```rust
/// use chatstat::core::week_activity_map;
/// use chatstat::parser::preprocess;
/// use chatstat::table::Selector;
///
/// // 1 January 2023 was a Sunday
/// let table = preprocess("1/1/23, 10:00 - A: x\n2/1/23, 10:00 - A: y");
/// let week = week_activity_map(&Selector::Overall, &table);
///
/// assert_eq!(week.get("Sunday"), Some(1));
/// assert_eq!(week.get("Monday"), Some(1));
/// assert_eq!(week.get("Friday"), Some(0));
/// assert_eq!(week.len(), 7);
/// ```
pub fn week_activity_map(selector: &Selector, table: &MessageTable) -> ActivityMap {
    let mut map = ActivityMap::zeroed(&WEEKDAY_NAMES);
    for msg in table.view(selector) {
        map.buckets[msg.weekday().num_days_from_monday() as usize].count += 1;
    }
    map
}

/// Messages per calendar month name, January to December, all years
/// combined.
pub fn month_activity_map(selector: &Selector, table: &MessageTable) -> ActivityMap {
    let mut map = ActivityMap::zeroed(&MONTH_NAMES);
    for msg in table.view(selector) {
        map.buckets[msg.month_num as usize - 1].count += 1;
    }
    map
}

/// Label of the hour-long bin starting at `hour`: `"0-1"` … `"23-0"`.
pub fn period_label(hour: u32) -> String {
    format!("{}-{}", hour, (hour + 1) % 24)
}

/// Weekday × hour message counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Heatmap {
    /// Row labels, Monday first.
    pub rows: [&'static str; 7],
    /// Column labels, `"0-1"` to `"23-0"`.
    pub columns: Vec<String>,
    /// `cells[weekday][hour]`.
    pub cells: [[usize; 24]; 7],
}

impl Heatmap {
    fn zeroed() -> Self {
        Self {
            rows: WEEKDAY_NAMES,
            columns: (0..24).map(period_label).collect(),
            cells: [[0; 24]; 7],
        }
    }

    /// Count for a weekday name and starting hour.
    pub fn get(&self, day: &str, hour: u32) -> Option<usize> {
        let row = self.rows.iter().position(|&r| r == day)?;
        self.cells[row].get(hour as usize).copied()
    }

    pub fn row(&self, day: &str) -> Option<&[usize; 24]> {
        let row = self.rows.iter().position(|&r| r == day)?;
        Some(&self.cells[row])
    }

    pub fn total(&self) -> usize {
        self.cells.iter().flatten().sum()
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// The busiest (weekday, hour) cell, `None` if every cell is zero.
    pub fn peak(&self) -> Option<(&'static str, u32, usize)> {
        let mut best: Option<(&'static str, u32, usize)> = None;
        for (day, row) in self.rows.iter().zip(&self.cells) {
            for (hour, &count) in row.iter().enumerate() {
                if count > best.map_or(0, |b| b.2) {
                    best = Some((*day, hour as u32, count));
                }
            }
        }
        best
    }
}

/// Builds the weekday × hour heatmap for `selector`.
pub fn activity_heatmap(selector: &Selector, table: &MessageTable) -> Heatmap {
    let mut heatmap = Heatmap::zeroed();
    for msg in table.view(selector) {
        let row = msg.weekday().num_days_from_monday() as usize;
        heatmap.cells[row][msg.hour as usize] += 1;
    }
    heatmap
}
