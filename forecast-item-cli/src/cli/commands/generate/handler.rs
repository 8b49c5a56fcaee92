//! Generate command handler

use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;
use colored::*;

use super::GenerateCommands;
use crate::config::Config;
use crate::preview::render_table;
use crate::remap::{
    OutputPaths, PlanningType, RemapEngine, RemapResult, RunStamp, read_master_excel,
    read_requests_excel, write_output_workbooks,
};

/// Settings for one run after merging command-line flags over the config file
#[derive(Debug, Clone, PartialEq, Eq)]
struct RunSettings {
    output_dir: PathBuf,
    stamp: RunStamp,
    preview_rows: usize,
}

impl RunSettings {
    fn resolve(args: &GenerateCommands, config: &Config) -> Self {
        let author = args.author.clone().unwrap_or_else(|| config.author.clone());
        let stamp = match args.run_date {
            Some(date) => RunStamp::new(author, date),
            None => RunStamp::today(author),
        };

        Self {
            output_dir: args
                .output_dir
                .clone()
                .unwrap_or_else(|| config.output_dir.clone()),
            stamp,
            preview_rows: args.preview_rows.unwrap_or(config.preview_rows),
        }
    }
}

/// Handle the generate command
pub fn handle_generate_command(args: GenerateCommands, config: &Config) -> Result<()> {
    if args.no_color {
        colored::control::set_override(false);
    }

    let settings = RunSettings::resolve(&args, config);
    let start = Instant::now();

    let (result, paths) = run_batch(&args, &settings)?;

    log::debug!("Run finished in {:.2}ms", start.elapsed().as_secs_f64() * 1000.0);

    println!("{}", "✅ Processing Complete".bright_green().bold());
    println!();

    for summary in &result.summaries {
        println!(
            "  Row {:>4}  New SKU {:<20} matched {:>5}  tactical {:>5}  operational {:>5}",
            summary.request_row,
            summary.new_sku.bright_white(),
            summary.matched,
            summary.tactical,
            summary.operational
        );
    }
    if !result.summaries.is_empty() {
        println!();
    }

    for (planning_type, path) in [
        (PlanningType::Tactical, &paths.tactical),
        (PlanningType::Operational, &paths.operational),
    ] {
        println!(
            "{:<19} {} ({} rows)",
            format!("{} output:", planning_type),
            path.display().to_string().bright_green(),
            result.table(planning_type).len()
        );
    }

    let dropped = result.total_dropped();
    if dropped > 0 {
        println!(
            "{}",
            format!(
                "{} matched rows had a ForecastItemType other than Tactical/Operational and were skipped",
                dropped
            )
            .yellow()
        );
    }

    if args.preview {
        for planning_type in [PlanningType::Tactical, PlanningType::Operational] {
            println!();
            print!("{}", render_table(result.table(planning_type), settings.preview_rows));
        }
    }

    Ok(())
}

/// Read both inputs, remap, and write both outputs
fn run_batch(args: &GenerateCommands, settings: &RunSettings) -> Result<(RemapResult, OutputPaths)> {
    let master = read_master_excel(&args.data_manager)?;
    let requests = read_requests_excel(&args.user_request)?;

    if master.is_empty() {
        log::warn!("Data manager file {} has no records", args.data_manager.display());
    }

    log::info!(
        "Loaded {} data manager records and {} requests",
        master.len(),
        requests.len()
    );

    let result = RemapEngine::run(&master, &requests, &settings.stamp)?;
    let paths = write_output_workbooks(&result, &settings.output_dir)?;

    Ok((result, paths))
}
