mod calendar;
mod cli;
mod created;
mod date;
mod error;
mod model;
mod output;
mod rolling;
mod series;

use std::fs;
use std::io::Read;
use std::path::Path;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;

use cli::{Cli, Command};
use date::CalendarDate;
use model::{DailyDataPoint, Packument};

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {:#}", e);
        process::exit(2);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Daily { input } => {
            let points = load_daily(&input)?;
            let series = series::build(&points)?;
            output::print_daily(&series, &cli.format);
        }
        Command::Weekly { input, start, end } => {
            let points = load_daily(&input)?;
            let start: CalendarDate = start.parse()?;
            let end: CalendarDate = end.parse()?;
            let buckets = rolling::aggregate(&points, start, end)?;
            output::print_weekly(&buckets, &cli.format);
        }
        Command::Monthly { input } => {
            let points = load_daily(&input)?;
            let buckets = calendar::by_month(&points)?;
            output::print_monthly(&buckets, &cli.format);
        }
        Command::Yearly { input } => {
            let points = load_daily(&input)?;
            let buckets = calendar::by_year(&points)?;
            output::print_yearly(&buckets, &cli.format);
        }
        Command::Created { input } => {
            let doc = load_packument(&input)?;
            let created = created::resolve(&doc);
            output::print_created(created.as_deref(), &cli.format);
        }
    }

    Ok(())
}

fn read_input(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("cannot read stdin")?;
        Ok(buf)
    } else {
        fs::read_to_string(path).with_context(|| format!("cannot read {}", path.display()))
    }
}

fn load_daily(path: &Path) -> Result<Vec<DailyDataPoint>> {
    let content = read_input(path)?;
    serde_json::from_str(&content)
        .context("input is not a JSON array of {day, downloads} records")
}

fn load_packument(path: &Path) -> Result<Packument> {
    let content = read_input(path)?;
    serde_json::from_str(&content).context("input is not a packument JSON document")
}
