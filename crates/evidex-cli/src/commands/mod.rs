//! CLI commands.

pub mod serve;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "evidex", about = "Evidex dashboard server", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the dashboard web server
    Serve(serve::ServeArgs),
}
