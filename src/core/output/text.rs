//! Plain-text report renderer.

use std::fmt::Write;

use crate::core::activity::period_label;
use crate::core::report::Report;

const BAR_WIDTH: usize = 30;

/// Renders a report as a human-readable summary.
pub fn to_text(report: &Report) -> String {
    let mut out = String::new();
    let _ = render(report, &mut out);
    out
}

fn render(report: &Report, out: &mut String) -> std::fmt::Result {
    let stats = &report.stats;

    writeln!(out, "📊 Top Statistics ({})", report.selector)?;
    writeln!(out, "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━")?;
    writeln!(out, "   Total Messages: {}", stats.messages)?;
    writeln!(out, "   Total Words:    {}", stats.words)?;
    writeln!(out, "   Media Shared:   {}", stats.media)?;
    writeln!(out, "   Links Shared:   {}", stats.links)?;

    writeln!(out)?;
    writeln!(out, "📅 Monthly Timeline")?;
    let max = report.monthly_timeline.iter().map(|p| p.count).max().unwrap_or(0);
    for point in &report.monthly_timeline {
        writeln!(out, "   {:<16} {:>6} {}", point.label, point.count, bar(point.count, max))?;
    }

    writeln!(out)?;
    writeln!(out, "📆 Daily Timeline")?;
    match (report.daily_timeline.first(), report.daily_timeline.last()) {
        (Some(first), Some(last)) => {
            let busiest = report.daily_timeline.iter().max_by_key(|p| p.count);
            writeln!(
                out,
                "   {} active days between {} and {}",
                report.daily_timeline.len(),
                first.date,
                last.date
            )?;
            if let Some(day) = busiest {
                writeln!(out, "   Busiest day: {} ({} messages)", day.date, day.count)?;
            }
        }
        _ => writeln!(out, "   No messages")?,
    }

    writeln!(out)?;
    writeln!(out, "🏆 Most Busy Days")?;
    let max = report.week_activity.ranked().first().map_or(0, |b| b.1);
    for (day, count) in report.week_activity.ranked() {
        writeln!(out, "   {:<10} {:>6} {}", day, count, bar(count, max))?;
    }

    writeln!(out)?;
    writeln!(out, "📅 Most Busy Months")?;
    let max = report.month_activity.ranked().first().map_or(0, |b| b.1);
    for (month, count) in report.month_activity.ranked() {
        if count > 0 {
            writeln!(out, "   {:<10} {:>6} {}", month, count, bar(count, max))?;
        }
    }

    writeln!(out)?;
    writeln!(out, "🔥 Weekly Activity Heatmap")?;
    match report.heatmap.peak() {
        Some((day, hour, count)) => writeln!(
            out,
            "   Peak: {} {} ({} messages)",
            day,
            period_label(hour),
            count
        )?,
        None => writeln!(out, "   No messages")?,
    }

    if let Some(busy) = &report.busy_users {
        writeln!(out)?;
        writeln!(out, "🏅 Most Active Users")?;
        for share in &busy.shares {
            writeln!(
                out,
                "   {:<20} {:>6} {:>6.2}%",
                share.user, share.count, share.percent
            )?;
        }
    }

    writeln!(out)?;
    writeln!(out, "🔤 Most Common Words")?;
    if report.common_words.is_empty() {
        writeln!(out, "   No words found")?;
    }
    for (word, count) in &report.common_words {
        writeln!(out, "   {:<20} {:>6}", word, count)?;
    }

    writeln!(out)?;
    writeln!(out, "😀 Emoji Analysis")?;
    if report.emoji.is_empty() {
        writeln!(out, "   No emojis found in the selected chat.")?;
    }
    for (emoji, count) in &report.emoji {
        writeln!(out, "   {}  {:>6}", emoji, count)?;
    }

    Ok(())
}

fn bar(count: usize, max: usize) -> String {
    if max == 0 {
        return String::new();
    }
    let width = (count * BAR_WIDTH).div_ceil(max);
    "█".repeat(width)
}
