use crate::commands::Commands;

use clap::Parser;

#[derive(Parser)]
#[command(name = "automate")]
#[command(about = "AutoMate portal: workflow assistants backed by an automation webhook")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,
}
