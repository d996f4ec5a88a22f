// ==========================================
// Substitute Scheduler - CLI entry point
// ==========================================
// The HTTP transport is hosted elsewhere; this binary drives the same API
// layer from the command line and prints JSON.
// ==========================================

use anyhow::{bail, Context, Result};

use substitute_scheduler::app::AppState;
use substitute_scheduler::config::Settings;
use substitute_scheduler::logging;

fn main() -> Result<()> {
    logging::init();

    tracing::info!("==================================================");
    tracing::info!("{}", substitute_scheduler::APP_NAME);
    tracing::info!("version: {}", substitute_scheduler::VERSION);
    tracing::info!("==================================================");

    let settings = Settings::from_env();
    let state = AppState::new(settings.backend).map_err(anyhow::Error::msg)?;

    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.first().map(String::as_str) {
        Some("generate") => {
            let (week, year) = parse_week_year(&args)?;
            let outcome = state.schedule_api.generate_schedule(week, year)?;
            println!("{}", serde_json::to_string_pretty(&outcome)?);
        }
        Some("schedule") => {
            let (week, year) = parse_week_year(&args)?;
            let schedule = state.schedule_api.weekly_schedule(week, year)?;
            println!("{}", serde_json::to_string_pretty(&schedule)?);
        }
        Some("stats") => {
            let stats = state.dashboard_api.stats()?;
            println!("{}", serde_json::to_string_pretty(&stats)?);
        }
        _ => {
            eprintln!("usage: substitute-scheduler <command>");
            eprintln!();
            eprintln!("commands:");
            eprintln!("  generate <week> <year>   run the assignment engine for a week");
            eprintln!("  schedule <week> <year>   print the composed weekly schedule");
            eprintln!("  stats                    print dashboard statistics");
            bail!("no command given");
        }
    }

    Ok(())
}

fn parse_week_year(args: &[String]) -> Result<(i32, i32)> {
    let week = args
        .get(1)
        .context("missing <week> argument")?
        .parse::<i32>()
        .context("<week> must be a number")?;
    let year = args
        .get(2)
        .context("missing <year> argument")?
        .parse::<i32>()
        .context("<year> must be a number")?;
    Ok((week, year))
}
