//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `osint_panel` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use std::process;
use std::str::FromStr;

use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use log::debug;
use strum::IntoEnumIterator;

use osint_panel::app::{
    format_dorks, format_operators, format_scan_report, AppState, ScanState, Tab,
};
use osint_panel::config::{Cli, Command, DorkCommand, PreviewArgs, ScanArgs};
use osint_panel::export::write_export;
use osint_panel::initialization::{init_logger_with, init_resolver};
use osint_panel::{categories, operators, search_url, Config, DorkCategory, DorkField};
use osint_panel::InvalidSelectionError;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.config();

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    if let Err(e) = config.validate() {
        eprintln!("osint_panel error: {e}");
        process::exit(2);
    }

    let mut state = AppState::new();
    let outcome = match &cli.command {
        Command::Scan(args) => scan(&mut state, &config, args).await,
        Command::Dork(command) => {
            state.switch_tab(Tab::Dorking);
            dork(&mut state, command)
        }
    };

    if let Err(e) = outcome {
        eprintln!("osint_panel error: {e:#}");
        process::exit(1);
    }
    Ok(())
}

async fn scan(state: &mut AppState, config: &Config, args: &ScanArgs) -> Result<()> {
    let Some(ticket) = state.begin_scan(&args.domain) else {
        debug!("Blank domain, nothing to scan");
        return Ok(());
    };

    let resolver = init_resolver(config).context("Failed to initialize HTTP client")?;
    let result = resolver.resolve(ticket.domain()).await;
    state.finish_scan(ticket, result);

    match state.scan() {
        ScanState::Completed(outcome) => {
            print!("{}", format_scan_report(outcome));
            for format in &args.exports {
                let path = write_export(&args.output_dir, &outcome.domain, &outcome.result, *format)?;
                println!("Saved {}", path.display());
            }
            Ok(())
        }
        ScanState::Failed {
            message, detail, ..
        } => {
            eprintln!("{}", message.red());
            eprintln!("  {detail}");
            process::exit(1);
        }
        _ => Ok(()),
    }
}

fn dork(state: &mut AppState, command: &DorkCommand) -> Result<()> {
    match command {
        DorkCommand::Preview(args) => preview(state, args),
        DorkCommand::Generate {
            category,
            target,
            search_url,
        } => {
            let category = DorkCategory::from_str(category)
                .map_err(|_| InvalidSelectionError::UnknownCategory(category.clone()))?;
            state.select_category(Some(category));
            state.set_target(target.as_str());
            let dorks = state.generate()?;
            print!("{}", format_dorks(dorks, *search_url));
            Ok(())
        }
        DorkCommand::Categories => {
            for name in categories() {
                println!("{name}");
            }
            Ok(())
        }
        DorkCommand::Operators => {
            print!("{}", format_operators(&operators()));
            Ok(())
        }
    }
}

fn preview(state: &mut AppState, args: &PreviewArgs) -> Result<()> {
    let fields = args.to_fields();
    for field in DorkField::iter() {
        state.set_field(field, fields.get(field));
    }

    let query = state.preview();
    if query.is_empty() {
        eprintln!("No operator fields given");
        return Ok(());
    }
    println!("{query}");
    if args.search_url {
        println!("{}", search_url(&query).dimmed());
    }
    Ok(())
}
