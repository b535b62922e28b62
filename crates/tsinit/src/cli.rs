//! CLI argument parsing with clap

use clap::{Args, Parser, Subcommand};

/// tsinit - CLI to scaffold a TS project with optional extras
#[derive(Parser, Debug)]
#[command(name = "tsinit")]
#[command(version, about = "CLI to scaffold a TS project with optional extras", long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress log output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialise a new TypeScript project
    Init(InitArgs),
}

#[derive(Args, Debug)]
pub struct InitArgs {
    /// Name of the project directory to create
    #[arg(value_name = "PROJECT_NAME")]
    pub project_name: String,
}
