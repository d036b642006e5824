use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};

use crate::config::{ServerConfig, DEFAULT_HOST, DEFAULT_PORT};
use crate::interface::PartialProfile;
use crate::logging::LogFormat;

/// Meal planner: estimates daily calories and recommends matching meals.
#[derive(Parser, Debug)]
#[command(name = "meal_planner")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Directory containing the meal CSV datasets.
    #[arg(short, long, env = "MEAL_DATA_DIR", default_value = ".", global = true)]
    pub data_dir: PathBuf,

    /// Log level filter (overridden by RUST_LOG).
    #[arg(long, default_value = "info", global = true)]
    pub log_level: String,

    /// Shorthand for --log-level debug.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Log output format.
    #[arg(long, value_enum, default_value_t = LogFormat::Pretty, global = true)]
    pub log_format: LogFormat,
}

impl Cli {
    pub fn effective_log_level(&self) -> &str {
        if self.verbose { "debug" } else { &self.log_level }
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the HTTP service.
    Serve(ServeArgs),

    /// Compute a meal plan in the terminal. Missing fields are prompted for.
    Plan(PlanArgs),

    /// Summarize the six meal datasets.
    Datasets,
}

impl Default for Command {
    fn default() -> Self {
        Command::Serve(ServeArgs::from_env())
    }
}

#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct ServeArgs {
    /// Address to bind the HTTP service to.
    #[arg(long, env = "MEAL_HOST", default_value = DEFAULT_HOST)]
    pub host: String,

    /// Port for the HTTP service.
    #[arg(long, env = "MEAL_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Load all datasets once at startup instead of on every request.
    #[arg(long)]
    pub preload: bool,
}

impl ServeArgs {
    /// Defaults plus `MEAL_HOST`/`MEAL_PORT`, for when no subcommand is given.
    pub fn from_env() -> Self {
        #[derive(Parser)]
        struct Defaults {
            #[command(flatten)]
            serve: ServeArgs,
        }
        Defaults::parse_from(["meal_planner"]).serve
    }

    pub fn server_config(&self, data_dir: &Path) -> ServerConfig {
        ServerConfig {
            host: self.host.clone(),
            port: self.port,
            data_dir: data_dir.to_path_buf(),
            preload: self.preload,
        }
    }
}

#[derive(Args, Debug, Default)]
pub struct PlanArgs {
    /// Age in years.
    #[arg(long)]
    pub age: Option<i64>,

    /// Weight in kilograms.
    #[arg(long)]
    pub weight: Option<f64>,

    /// Height in centimetres.
    #[arg(long)]
    pub height: Option<f64>,

    /// male or female.
    #[arg(long)]
    pub gender: Option<String>,

    /// sedentary, lightly_active, moderately_active, active or very_active.
    #[arg(long)]
    pub activity_level: Option<String>,

    /// loss, maintain or gain.
    #[arg(long)]
    pub weight_goal: Option<String>,

    /// Print the JSON response instead of a table.
    #[arg(long)]
    pub json: bool,
}

impl PlanArgs {
    pub fn partial_profile(&self) -> PartialProfile {
        PartialProfile {
            age: self.age,
            weight: self.weight,
            height: self.height,
            gender: self.gender.clone(),
            activity_level: self.activity_level.clone(),
            weight_goal: self.weight_goal.clone(),
        }
    }
}
