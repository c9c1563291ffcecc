//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Args`] - CLI argument structure (for use with clap)
//! - [`DateOrderArg`] - Date order selection, including auto-detection
//! - [`FormatArg`] - Report output format

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};

use crate::config::DateOrder;
use crate::format::OutputFormat;
use crate::table::Selector;

/// Compute message, activity, word and emoji statistics
/// from a WhatsApp text export.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatstat")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatstat chat.txt
    chatstat chat.txt --user Alice
    chatstat chat.txt --date-order month-first --format json
    chatstat chat.txt --list-users
    chatstat chat.txt --dump-table > table.csv")]
pub struct Args {
    /// Path to the exported chat (.txt)
    pub input: PathBuf,

    /// Restrict statistics to one sender ("Overall" for the whole chat)
    #[arg(short, long, value_name = "NAME", default_value = "Overall")]
    pub user: String,

    /// How to read ambiguous dates such as 03/04/2023
    #[arg(long, value_enum, default_value = "day-first")]
    pub date_order: DateOrderArg,

    /// Report format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: FormatArg,

    /// Replace the bundled stop-word list with this file
    #[arg(long, value_name = "FILE")]
    pub stop_words: Option<PathBuf>,

    /// Number of common words to report
    #[arg(long, value_name = "N", default_value_t = 20)]
    pub top_words: usize,

    /// Number of busiest users to report
    #[arg(long, value_name = "N", default_value_t = 5)]
    pub top_users: usize,

    /// Print the selectable users and exit
    #[arg(long, conflicts_with = "dump_table")]
    pub list_users: bool,

    /// Write the parsed table as CSV to stdout and exit
    #[arg(long)]
    pub dump_table: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// The selector named by `--user`.
    pub fn selector(&self) -> Selector {
        Selector::from(self.user.clone())
    }

    /// Default log directive for the verbosity level.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}

/// Date order as chosen on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default)]
pub enum DateOrderArg {
    /// DD/MM/YY (default)
    #[default]
    #[value(alias = "dmy")]
    DayFirst,

    /// MM/DD/YY
    #[value(alias = "mdy")]
    MonthFirst,

    /// Guess from the export, falling back to day-first
    Auto,
}

impl DateOrderArg {
    /// The fixed order, or `None` for auto-detection.
    pub fn fixed(self) -> Option<DateOrder> {
        match self {
            DateOrderArg::DayFirst => Some(DateOrder::DayFirst),
            DateOrderArg::MonthFirst => Some(DateOrder::MonthFirst),
            DateOrderArg::Auto => None,
        }
    }
}

/// Report format as chosen on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default)]
pub enum FormatArg {
    /// Human-readable summary (default)
    #[default]
    Text,

    /// Pretty-printed JSON
    Json,
}

// Conversion to library format type
impl From<FormatArg> for OutputFormat {
    fn from(format: FormatArg) -> OutputFormat {
        match format {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}
