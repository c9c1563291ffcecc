//! CSV dump of the parsed message table.

use crate::core::activity::period_label;
use crate::error::ChatstatError;
use crate::table::MessageTable;

const HEADER: [&str; 12] = [
    "date",
    "user",
    "message",
    "only_date",
    "year",
    "month_num",
    "month",
    "day",
    "day_name",
    "hour",
    "minute",
    "period",
];

/// Converts the table to CSV, one row per message, derived columns
/// included.
///
/// # Format
/// - Delimiter: `;`
/// - Columns: `date`, `user`, `message`, then the derived calendar columns
/// - Encoding: UTF-8
pub fn to_csv(table: &MessageTable) -> Result<String, ChatstatError> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b';')
        .from_writer(Vec::new());

    writer.write_record(HEADER)?;

    for msg in table {
        writer.write_record([
            msg.timestamp.format("%Y-%m-%d %H:%M:%S").to_string(),
            msg.sender.to_string(),
            msg.body.clone(),
            msg.date_only.to_string(),
            msg.year.to_string(),
            msg.month_num.to_string(),
            msg.month_name.to_string(),
            msg.day.to_string(),
            msg.day_name.to_string(),
            msg.hour.to_string(),
            msg.minute.to_string(),
            period_label(msg.hour),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ChatstatError::Io(e.into_error()))?;
    String::from_utf8(bytes).map_err(|e| ChatstatError::utf8(e, None))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::preprocess;

    #[test]
    fn test_to_csv_columns() {
        let table = preprocess(
            "01/01/2024, 23:15 - Alice: hi; there\n01/01/2024, 23:16 - Alice added Bob",
        );
        let csv = to_csv(&table).unwrap();
        let mut lines = csv.lines();

        assert_eq!(
            lines.next(),
            Some("date;user;message;only_date;year;month_num;month;day;day_name;hour;minute;period")
        );
        assert_eq!(
            lines.next(),
            Some("2024-01-01 23:15:00;Alice;\"hi; there\";2024-01-01;2024;1;January;1;Monday;23;15;23-0")
        );
        assert!(lines.next().unwrap().contains(";group_notification;Alice added Bob;"));
    }

    #[test]
    fn test_to_csv_multiline_body_quoted() {
        let table = preprocess("01/01/2024, 09:00 - Alice: one\ntwo");
        let csv = to_csv(&table).unwrap();
        assert!(csv.contains("\"one\ntwo\""));
    }

    #[test]
    fn test_to_csv_empty_table() {
        let csv = to_csv(&MessageTable::default()).unwrap();
        assert_eq!(csv.lines().count(), 1);
    }
}
