//! JSON report writer.

use crate::core::report::Report;
use crate::error::ChatstatError;

/// Converts a report to pretty-printed JSON.
///
/// # Format
/// ```json
/// {
///   "selector": "Overall",
///   "stats": {"messages": 3, "words": 2, "media": 1, "links": 0},
///   "monthly_timeline": [{"index": 0, "year": 2023, "month_num": 1, "label": "January-2023", "count": 3}],
///   "week_activity": [{"label": "Monday", "count": 0}, ...],
///   ...
/// }
/// ```
pub fn to_json(report: &Report) -> Result<String, ChatstatError> {
    Ok(serde_json::to_string_pretty(report)?)
}
