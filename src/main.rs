//! # chatstat CLI
//!
//! Command-line interface for the chatstat library.

use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use chatstat::ChatstatError;
use chatstat::cli::Args;
use chatstat::config::{AnalysisConfig, DateOrder, ParserConfig, StopWords};
use chatstat::core::Report;
use chatstat::core::output::to_csv;
use chatstat::format::{OutputFormat, to_format_string};
use chatstat::parser::WhatsAppParser;
use chatstat::parsing::detect_date_order;
use chatstat::table::Selector;

fn main() {
    let args = <Args as ClapParser>::parse();
    init_tracing(&args);

    if let Err(e) = run(&args) {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

fn init_tracing(args: &Args) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(args.log_level()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(args: &Args) -> Result<(), ChatstatError> {
    let total_start = Instant::now();

    let raw = std::fs::read(&args.input)?;
    let raw = String::from_utf8(raw).map_err(|e| ChatstatError::utf8(e, Some(args.input.clone())))?;

    let date_order = resolve_date_order(args, &raw);
    info!(input = %args.input.display(), %date_order, "parsing export");

    let parser = WhatsAppParser::with_config(ParserConfig::new().with_date_order(date_order));
    let parse_start = Instant::now();
    let table = parser.parse_str(&raw);
    info!(
        messages = table.len(),
        elapsed_ms = parse_start.elapsed().as_millis() as u64,
        "parsed table"
    );

    if args.list_users {
        for user in table.selectable_users() {
            println!("{}", user);
        }
        return Ok(());
    }

    if args.dump_table {
        print!("{}", to_csv(&table)?);
        return Ok(());
    }

    let selector = args.selector();
    if let Selector::Sender(name) = &selector {
        if !table.has_sender(name) {
            warn!(user = %name, "no messages from this sender");
        }
    }

    let mut config = AnalysisConfig::new()
        .with_top_words(args.top_words)
        .with_top_users(args.top_users);
    if let Some(path) = &args.stop_words {
        config = config.with_stop_words(StopWords::from_path(path)?);
    }

    let report = Report::build(&selector, &table, &config);
    let format: OutputFormat = args.format.into();
    println!("{}", to_format_string(&report, format)?);

    info!(
        elapsed_ms = total_start.elapsed().as_millis() as u64,
        "done"
    );
    Ok(())
}

fn resolve_date_order(args: &Args, raw: &str) -> DateOrder {
    if let Some(order) = args.date_order.fixed() {
        return order;
    }
    match detect_date_order(raw) {
        Some(order) => {
            info!(%order, "detected date order");
            order
        }
        None => {
            info!("date order is ambiguous, using {}", DateOrder::default());
            DateOrder::default()
        }
    }
}
