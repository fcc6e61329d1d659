//! Runs every style over 1..=10 and prints what each one finds.
//!
//! Run with: cargo run --bin lambda_tour [-- --json]

use anyhow::{Context, Result};
use colored::Colorize;
use itertools::Itertools;
use tracing_subscriber::EnvFilter;

use first_match::{deferred_tasks, run_all, Style, StyleReport, NUMBERS};

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn print_report(report: &StyleReport) {
    let value = match report.result {
        Some(v) => v.to_string().green(),
        None => "none".yellow(),
    };
    println!("  {:<50} {}", report.style.to_string(), value);
}

fn main() -> Result<()> {
    init_logging();
    let json = std::env::args().skip(1).any(|arg| arg == "--json");

    let tasks = deferred_tasks();
    let reports = run_all(&NUMBERS).context("running the styles over 1..=10")?;

    if json {
        let out = serde_json::to_string_pretty(&reports).context("serializing style reports")?;
        println!("{}", out);
        return Ok(());
    }

    println!("{}", "=== First even number greater than 3, doubled ===".bold());
    println!("Input: [{}]\n", NUMBERS.iter().join(", "));

    println!("{}", "Deferred tasks (built, never started)".bold());
    for (style, task) in Style::ALL.iter().filter(|s| !s.computes()).zip(&tasks) {
        let state = if task.is_started() { "started" } else { "not started" };
        println!("  {:<50} {}", style.to_string(), state.dimmed());
    }

    println!("\n{}", "Computations".bold());
    for report in &reports {
        print_report(report);
    }

    let distinct = reports.iter().filter_map(|r| r.result).unique().count();
    if distinct > 1 {
        println!(
            "\n{}",
            "Style -7 filters on > 4 rather than > 3, so it lands on 6.".dimmed()
        );
    }

    Ok(())
}
