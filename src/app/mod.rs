//! Top-level driver: argument validation, then the scaffold engine.
//!
//! Every outcome is reported on the console and returned as a [`RunStatus`];
//! none of them turn into a distinct process exit code.

use crate::adapters::{LocalStorage, SystemCommandRunner};
use crate::config::CliConfig;
use crate::core::engine::ScaffoldEngine;
use crate::domain::model::{RunPlan, RunReport};
use crate::utils::error::ScaffoldError;
use clap::CommandFactory;

#[derive(Debug)]
pub enum RunStatus {
    /// Arguments were missing or invalid; usage was printed and nothing was touched.
    Usage(ScaffoldError),
    DryRun(RunPlan),
    Completed(RunReport),
    Failed(ScaffoldError),
}

pub async fn run(cli: CliConfig) -> RunStatus {
    // 驗證參數 (before anything touches the disk)
    let tool = match cli.tool_config() {
        Ok(tool) => tool,
        Err(e) => {
            tracing::error!("Configuration load failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            return RunStatus::Failed(e);
        }
    };

    let config = match cli.resolve(&tool) {
        Ok(config) => config,
        Err(e) => {
            tracing::debug!("Argument validation failed: {}", e);
            eprintln!("{}", e.user_friendly_message());
            if let Err(help_err) = CliConfig::command().print_help() {
                tracing::debug!("Failed to print usage: {}", help_err);
            }
            return RunStatus::Usage(e);
        }
    };

    let storage = LocalStorage::new(config.output_dir.clone());
    let engine = ScaffoldEngine::new(storage, SystemCommandRunner::new(), config);

    if cli.dry_run {
        let plan = engine.plan();
        print_plan(&plan);
        return RunStatus::DryRun(plan);
    }

    match engine.run().await {
        Ok(report) => {
            tracing::info!(
                "Created {} ({} readme files, entry point written: {})",
                report.base_dir,
                report.readme_files.len(),
                report.entry_point.is_written()
            );
            println!("succeed to create {}", report.base_dir);
            RunStatus::Completed(report)
        }
        Err(e) => {
            tracing::error!(
                "Scaffolding failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            match e.category() {
                crate::utils::error::ErrorCategory::Compiler => {
                    println!("failed to parse tars file:{}", e.user_friendly_message())
                }
                _ => println!("failed to create project:{}", e.user_friendly_message()),
            }
            eprintln!("💡 {}", e.recovery_suggestion());
            RunStatus::Failed(e)
        }
    }
}

fn print_plan(plan: &RunPlan) {
    println!("🔍 DRY RUN - nothing will be written");
    println!("Directories (each with readme.md):");
    for dir in &plan.directories {
        println!("  {}", dir);
    }
    println!("Compiler: {}", plan.command);
    println!("Entry point: {}", plan.entry_point);
}
