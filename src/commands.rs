use anyhow::{Context, Result};
use colored::*;
use course_organizer::engine::PersistResult;
use course_organizer::utils::{absolute_clean, file_name_lossy};
use course_organizer::{materialize, store, AppConfig, MaterializeReport, Organizer, ScanResult};
use std::path::Path;
use tracing::{info, warn};

use crate::cli::{FullArgs, GenerateArgs, SymlinkArgs};

pub fn run_generate(config: &AppConfig, args: &GenerateArgs) -> Result<()> {
    let organizer = Organizer::new(config.clone());
    let result = organizer
        .scan(&args.course)
        .context("Error getting folder structure")?;
    print_scan_summary(&result);

    let written = organizer.persist(&result, args.json.as_deref());
    print_persisted(&written);

    Ok(())
}

pub fn run_symlink(args: &SymlinkArgs) -> Result<()> {
    let series = store::read_series(&args.json)
        .with_context(|| format!("Error reading JSON file {}", args.json.display()))?;

    let series_dir_name = match &args.name {
        Some(name) => name.clone(),
        None => series_dir_name_for(&args.output)?,
    };
    info!(
        "Loaded {} seasons, {} episodes from {}",
        series.seasons.len(),
        series.episode_count(),
        args.json.display()
    );

    let report = materialize(&series, &args.output, &series_dir_name);
    print_report(&report);

    Ok(())
}

pub fn run_full(config: &AppConfig, args: &FullArgs) -> Result<()> {
    let organizer = Organizer::new(config.clone());
    let result = organizer
        .scan(&args.course)
        .context("Error getting folder structure")?;
    print_scan_summary(&result);

    if args.generate_json {
        let written = organizer.persist(&result, None);
        print_persisted(&written);
    }

    let report = materialize(&result.series, &args.output, &result.root.name);
    print_report(&report);

    Ok(())
}

pub fn run_print_config(config: &AppConfig) -> Result<()> {
    let pretty = serde_json::to_string_pretty(config).context("Error formatting configuration")?;
    println!("{}", pretty);
    Ok(())
}

fn series_dir_name_for(output: &Path) -> Result<String> {
    let absolute = absolute_clean(output)
        .with_context(|| format!("Error resolving output directory {}", output.display()))?;
    Ok(file_name_lossy(&absolute))
}

fn print_scan_summary(result: &ScanResult) {
    info!(
        "Scan: {}, Build: {}",
        format!("{:.2}s", result.scan_duration.as_secs_f64()).green(),
        format!("{:.2}s", result.build_duration.as_secs_f64()).green(),
    );
    for season in &result.series.seasons {
        println!(
            "{} ({} episodes)",
            season.name().cyan(),
            season.episodes.len()
        );
    }
}

fn print_persisted(written: &PersistResult) {
    if let Some(path) = &written.original_structure {
        println!(
            "Original structure has been written to {}",
            path.display().to_string().green()
        );
    }
    if let Some(path) = &written.series_structure {
        println!(
            "Series structure has been written to {}",
            path.display().to_string().green()
        );
    }
}

fn print_report(report: &MaterializeReport) {
    println!(
        "{} symlinks created in {} season directories",
        format!("{}", report.links_created).green(),
        format!("{}", report.seasons_created).green(),
    );
    if !report.is_complete() {
        warn!(
            "{} entries could not be created",
            format!("{}", report.failures.len()).red()
        );
    }
}
