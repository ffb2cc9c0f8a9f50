mod commands;
mod dialog;
mod summary;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "gigapan", about = "Gigapan yaw/pitch coordinate generator")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the coordinate file for a gigapan
    Generate(commands::generate::GenerateArgs),
    /// Show fields of view, steps and shot count without writing anything
    Plan(commands::plan::PlanArgs),
    /// Print or save a default job description as TOML
    Config(commands::config::ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match &cli.command {
        Commands::Generate(args) => commands::generate::run(args),
        Commands::Plan(args) => commands::plan::run(args),
        Commands::Config(args) => commands::config::run(args),
    }
}
