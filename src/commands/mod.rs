pub mod export;
pub mod init;
pub mod log;
pub mod plant;
pub mod schedule;
pub mod task;
pub mod today;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Manage the plant registry")]
    Plant(plant::PlantArgs),
    #[command(about = "Manage care tasks")]
    Task(task::TaskArgs),
    #[command(about = "Show care due and scheduled for today")]
    Today,
    #[command(about = "Show the monthly care calendar")]
    Schedule(schedule::ScheduleArgs),
    #[command(about = "Show the care history")]
    Log(log::LogArgs),
    #[command(about = "Export tasks or care history")]
    Export(export::ExportArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Plant(args) => plant::cmd(args),
            Commands::Task(args) => task::cmd(args),
            Commands::Today => today::cmd(),
            Commands::Schedule(args) => schedule::cmd(args),
            Commands::Log(args) => log::cmd(args),
            Commands::Export(args) => export::cmd(args),
        }
    }
}
