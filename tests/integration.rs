//! Integration tests: parse an export file, then run every aggregation.

use chatstat::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Once;

static INIT: Once = Once::new();

fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_TARGET_TMPDIR")).join("chatstat_fixtures")
}

fn ensure_fixtures() {
    INIT.call_once(|| {
        let dir = fixtures_dir();
        fs::create_dir_all(&dir).unwrap();

        // Android, 12-hour clock, day-first
        let android = "\
12/01/2023, 9:15 pm - Messages and calls are end-to-end encrypted. No one outside of this chat, not even WhatsApp, can read or listen to them. Tap to learn more.
12/01/2023, 9:16 pm - Alice created group \"Weekend\"
12/01/2023, 9:17 pm - Alice: Pizza tonight? 🍕
12/01/2023, 9:18 pm - Bob: yes!! 🍕🍕
check https://example.com/menu
12/01/2023, 9:20 pm - Carol: <Media omitted>
13/01/2023, 8:05 am - Alice: good morning
14/02/2023, 10:00 am - Bob: happy valentines ❤
14/02/2023, 10:01 am - Alice: 😂
";
        fs::write(dir.join("android.txt"), android).unwrap();

        // iOS, bracketed stamps with seconds, month-first
        let ios = "\
[1/15/24, 10:30:45 AM] Alice: Hello from iOS
[1/15/24, 10:31:02 AM] Bob: Hi Alice
this continues
[2/20/24, 11:00:00 PM] Alice: late message
";
        fs::write(dir.join("ios.txt"), ios).unwrap();
    });
}

fn load(name: &str, order: DateOrder) -> MessageTable {
    ensure_fixtures();
    let parser = WhatsAppParser::with_config(ParserConfig::new().with_date_order(order));
    parser.parse(&fixtures_dir().join(name)).unwrap()
}

// =========================================================================
// Parsing
// =========================================================================

#[test]
fn test_android_export_rows() {
    let table = load("android.txt", DateOrder::DayFirst);

    assert_eq!(table.len(), 8);
    assert_eq!(table.notification_count(), 2);
    assert_eq!(table.senders(), vec!["Alice", "Bob", "Carol"]);
    assert_eq!(
        table.selectable_users(),
        vec!["Overall", "Alice", "Bob", "Carol"]
    );

    let bob = &table.rows()[3];
    assert_eq!(bob.sender, Sender::user("Bob"));
    assert_eq!(bob.body, "yes!! 🍕🍕\ncheck https://example.com/menu");
    assert_eq!(bob.hour, 21);
    assert_eq!(bob.minute, 18);
    assert_eq!(bob.month_name, "January");
    assert_eq!(bob.day_name, "Thursday");
}

#[test]
fn test_ios_export_month_first() {
    let table = load("ios.txt", DateOrder::MonthFirst);

    assert_eq!(table.len(), 3);
    assert_eq!(table.rows()[0].timestamp.to_string(), "2024-01-15 10:30:45");
    assert_eq!(table.rows()[1].body, "Hi Alice\nthis continues");
    assert_eq!(table.rows()[2].hour, 23);
}

#[test]
fn test_ios_export_day_first_drops_impossible_dates() {
    // 1/15/24 read day-first is month 15
    let table = load("ios.txt", DateOrder::DayFirst);
    assert!(table.is_empty());
}

#[test]
fn test_detect_date_order_on_fixtures() {
    ensure_fixtures();
    let android = fs::read_to_string(fixtures_dir().join("android.txt")).unwrap();
    let ios = fs::read_to_string(fixtures_dir().join("ios.txt")).unwrap();

    assert_eq!(detect_date_order(&android), Some(DateOrder::DayFirst));
    assert_eq!(detect_date_order(&ios), Some(DateOrder::MonthFirst));
}

// =========================================================================
// Aggregations
// =========================================================================

#[test]
fn test_overall_stats() {
    let table = load("android.txt", DateOrder::DayFirst);
    let stats = fetch_stats(&Selector::Overall, &table, &AnalysisConfig::default());

    assert_eq!(stats.messages, 8);
    assert_eq!(stats.media, 1);
    assert_eq!(stats.links, 1);
    // 3 + 4 + 2 + 3 + 1, notifications and media excluded
    assert_eq!(stats.words, 13);
}

#[test]
fn test_sender_stats() {
    let table = load("android.txt", DateOrder::DayFirst);
    let config = AnalysisConfig::default();

    let alice = fetch_stats(&Selector::sender("Alice"), &table, &config);
    assert_eq!(alice.messages, 3);
    assert_eq!(alice.media, 0);

    let carol = fetch_stats(&Selector::sender("Carol"), &table, &config);
    assert_eq!(carol.messages, 1);
    assert_eq!(carol.media, 1);
    assert_eq!(carol.words, 0);
}

#[test]
fn test_timelines() {
    let table = load("android.txt", DateOrder::DayFirst);

    let monthly = monthly_timeline(&Selector::Overall, &table);
    let labels: Vec<&str> = monthly.iter().map(|p| p.label.as_str()).collect();
    assert_eq!(labels, vec!["January-2023", "February-2023"]);
    assert_eq!(monthly[0].count, 6);
    assert_eq!(monthly[1].count, 2);

    let daily = daily_timeline(&Selector::Overall, &table);
    assert_eq!(daily.len(), 3);
    assert_eq!(daily[0].count, 5);
    assert!(daily.windows(2).all(|w| w[0].date < w[1].date));
}

#[test]
fn test_activity_maps() {
    let table = load("android.txt", DateOrder::DayFirst);

    let week = week_activity_map(&Selector::Overall, &table);
    assert_eq!(week.len(), 7);
    assert_eq!(week.get("Thursday"), Some(5));
    assert_eq!(week.get("Friday"), Some(1));
    assert_eq!(week.get("Tuesday"), Some(2));
    assert_eq!(week.get("Sunday"), Some(0));
    assert_eq!(week.ranked()[0], ("Thursday", 5));

    let months = month_activity_map(&Selector::Overall, &table);
    assert_eq!(months.len(), 12);
    assert_eq!(months.get("January"), Some(6));
    assert_eq!(months.get("December"), Some(0));
}

#[test]
fn test_heatmap() {
    let table = load("android.txt", DateOrder::DayFirst);
    let heatmap = activity_heatmap(&Selector::Overall, &table);

    assert_eq!(heatmap.total(), table.len());
    assert_eq!(heatmap.get("Thursday", 21), Some(5));
    assert_eq!(heatmap.get("Tuesday", 10), Some(2));
    assert_eq!(heatmap.columns()[21], "21-22");
    assert_eq!(heatmap.peak(), Some(("Thursday", 21, 5)));
}

#[test]
fn test_busy_users() {
    let table = load("android.txt", DateOrder::DayFirst);
    let busy = most_busy_users(&table, &AnalysisConfig::new().with_top_users(2));

    assert_eq!(
        busy.top,
        vec![("Alice".to_string(), 3), ("Bob".to_string(), 2)]
    );
    assert_eq!(busy.shares.len(), 3);
    assert!((busy.shares[0].percent - 50.0).abs() < f64::EPSILON);
    assert!((busy.shares[2].percent - 16.67).abs() < 1e-9);
}

#[test]
fn test_common_words_and_emoji() {
    let table = load("android.txt", DateOrder::DayFirst);
    let config = AnalysisConfig::new().with_stop_words(StopWords::parse("yes!! check"));

    let words = most_common_words(&Selector::Overall, &table, &config);
    assert_eq!(words.len(), 11);
    assert_eq!(words[0], ("pizza".to_string(), 1));
    assert!(words.iter().all(|(w, _)| w != "yes!!" && w != "check"));
    assert!(!words.iter().any(|(w, _)| w.contains("media")));

    let emoji = emoji_helper(&Selector::Overall, &table);
    assert_eq!(emoji[0], ("🍕".to_string(), 3));
    assert!(emoji.iter().any(|(e, _)| e == "😂"));
}

#[test]
fn test_report_for_sender_has_no_busy_users() {
    let table = load("android.txt", DateOrder::DayFirst);
    let config = AnalysisConfig::default();

    let overall = Report::build(&Selector::Overall, &table, &config);
    assert!(overall.busy_users.is_some());

    let bob = Report::build(&Selector::sender("Bob"), &table, &config);
    assert!(bob.busy_users.is_none());
    assert_eq!(bob.stats.messages, 2);
    assert_eq!(bob.heatmap.total(), 2);
}

#[test]
fn test_report_renders_every_format() {
    let table = load("android.txt", DateOrder::DayFirst);
    let report = Report::build(&Selector::Overall, &table, &AnalysisConfig::default());

    let text = to_format_string(&report, OutputFormat::Text).unwrap();
    assert!(text.contains("Total Messages: 8"));

    let json = to_format_string(&report, OutputFormat::Json).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["selector"], "Overall");
    assert_eq!(value["stats"]["links"], 1);

    let csv = to_csv(&table).unwrap();
    assert_eq!(csv.lines().next().unwrap().split(';').count(), 12);
}

#[test]
fn test_three_line_scenario() {
    let table = preprocess(
        "1/1/23, 10:00 AM - Alice: hello world\n\
         1/1/23, 10:01 AM - Bob: <Media omitted>\n\
         1/1/23, 10:02 AM - Alice joined",
    );
    let stats = fetch_stats(&Selector::Overall, &table, &AnalysisConfig::default());

    assert_eq!(
        (stats.messages, stats.words, stats.media, stats.links),
        (3, 2, 1, 0)
    );
    assert_eq!(table.senders(), vec!["Alice", "Bob"]);

    let week = week_activity_map(&Selector::Overall, &table);
    assert_eq!(week.get("Sunday"), Some(3));
    assert_eq!(week.total(), 3);
}
