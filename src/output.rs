use colored::*;
use serde::Serialize;

use crate::cli::Format;
use crate::model::{DailyEvolutionPoint, MonthlyBucket, WeeklyBucket, YearlyBucket};

fn print_json<T: Serialize>(value: &T) {
    let json = serde_json::to_string_pretty(value).expect("failed to serialize");
    println!("{}", json);
}

fn bar(count: u64, max: u64, width: u64) -> String {
    if max == 0 {
        return String::new();
    }
    let filled = (count * width).div_ceil(max);
    "\u{2588}".repeat(filled as usize)
}

pub fn print_daily(series: &[DailyEvolutionPoint], format: &Format) {
    match format {
        Format::Text => {
            println!("{}", "Daily downloads".bold().underline());
            let max = series.iter().map(|p| p.downloads).max().unwrap_or(0);
            for p in series {
                println!("  {}  {:>10}  {}", p.day, p.downloads, bar(p.downloads, max, 20).dimmed());
            }
            let total: u64 = series.iter().map(|p| p.downloads).sum();
            println!("\n{} downloads across {} days", total, series.len());
        }
        Format::Json => print_json(&series),
    }
}

pub fn print_weekly(buckets: &[WeeklyBucket], format: &Format) {
    match format {
        Format::Text => {
            println!("{}", "Weekly downloads".bold().underline());
            let max = buckets.iter().map(|b| b.downloads).max().unwrap_or(0);
            for b in buckets {
                println!(
                    "  {}..{}  {:>10}  {}",
                    b.week_start,
                    b.week_end,
                    b.downloads,
                    bar(b.downloads, max, 20).dimmed()
                );
            }
            let total: u64 = buckets.iter().map(|b| b.downloads).sum();
            println!("\n{} downloads across {} weeks", total, buckets.len());
        }
        Format::Json => print_json(&buckets),
    }
}

pub fn print_monthly(buckets: &[MonthlyBucket], format: &Format) {
    match format {
        Format::Text => {
            println!("{}", "Monthly downloads".bold().underline());
            let max = buckets.iter().map(|b| b.downloads).max().unwrap_or(0);
            for b in buckets {
                println!("  {}  {:>10}  {}", b.month, b.downloads, bar(b.downloads, max, 20).dimmed());
            }
            let total: u64 = buckets.iter().map(|b| b.downloads).sum();
            println!("\n{} downloads across {} months", total, buckets.len());
        }
        Format::Json => print_json(&buckets),
    }
}

pub fn print_yearly(buckets: &[YearlyBucket], format: &Format) {
    match format {
        Format::Text => {
            println!("{}", "Yearly downloads".bold().underline());
            let max = buckets.iter().map(|b| b.downloads).max().unwrap_or(0);
            for b in buckets {
                println!("  {}  {:>10}  {}", b.year, b.downloads, bar(b.downloads, max, 20).dimmed());
            }
            let total: u64 = buckets.iter().map(|b| b.downloads).sum();
            println!("\n{} downloads across {} years", total, buckets.len());
        }
        Format::Json => print_json(&buckets),
    }
}

pub fn print_created(created: Option<&str>, format: &Format) {
    match format {
        Format::Text => match created {
            Some(ts) => println!("created: {}", ts.bold()),
            None => println!("created: {}", "unknown".dimmed()),
        },
        Format::Json => {
            #[derive(Serialize)]
            struct Created<'a> {
                created: Option<&'a str>,
            }
            print_json(&Created { created });
        }
    }
}
