use std::path::Path;
use std::sync::Arc;

use clap::Parser;
use tracing::info;

use meal_planner_rs::cli::{Cli, Command, PlanArgs};
use meal_planner_rs::config::ServerConfig;
use meal_planner_rs::datasets::{CsvDirectoryProvider, InMemoryProvider, MealDatasetProvider};
use meal_planner_rs::error::Result;
use meal_planner_rs::interface::{collect_profile, display_dataset_summary, display_meal_plan};
use meal_planner_rs::logging;
use meal_planner_rs::service::MealPlanService;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.effective_log_level(), cli.log_format)?;

    let command = cli.command.unwrap_or_default();

    match command {
        Command::Serve(args) => cmd_serve(&args.server_config(&cli.data_dir)),
        Command::Plan(args) => cmd_plan(&cli.data_dir, &args),
        Command::Datasets => cmd_datasets(&cli.data_dir),
    }
}

/// Build the dataset provider for a data directory.
fn build_provider(data_dir: &Path, preload: bool) -> Result<Arc<dyn MealDatasetProvider>> {
    let csv = CsvDirectoryProvider::new(data_dir);
    if preload {
        let memory = InMemoryProvider::preload(&csv)?;
        Ok(Arc::new(memory))
    } else {
        Ok(Arc::new(csv))
    }
}

/// Run the HTTP service.
fn cmd_serve(config: &ServerConfig) -> Result<()> {
    let service = MealPlanService::new(build_provider(&config.data_dir, config.preload)?);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(meal_planner_rs::server::serve(config, service))?;
    info!("meal planner stopped");
    Ok(())
}

/// Compute and print a meal plan.
fn cmd_plan(data_dir: &Path, args: &PlanArgs) -> Result<()> {
    let service = MealPlanService::new(build_provider(data_dir, false)?);
    let (profile, goal) = collect_profile(args.partial_profile())?;

    let plan = service.plan(&profile, goal)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
    } else {
        display_meal_plan(&plan);
    }

    Ok(())
}

/// Summarize the datasets found in the data directory.
fn cmd_datasets(data_dir: &Path) -> Result<()> {
    let provider = build_provider(data_dir, false)?;
    display_dataset_summary(provider.as_ref())
}
