use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "sticky", about = concat!("[*] sticky v", env!("CARGO_PKG_VERSION"), " - a sticky note in your terminal"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Use a different task file
    #[arg(long, global = true)]
    pub file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the checklist
    List(ListArgs),
    /// Add a task
    Add(AddArgs),
    /// Tick a task's checkbox
    Check(IndexArgs),
    /// Untick a task's checkbox
    Uncheck(IndexArgs),
    /// Remove tasks
    Rm(RmArgs),
}

#[derive(Args)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct AddArgs {
    /// Task text (words are joined with spaces)
    #[arg(required = true)]
    pub text: Vec<String>,
}

#[derive(Args)]
pub struct IndexArgs {
    /// Task number, as shown by `list` (1-based)
    pub index: usize,
}

#[derive(Args)]
pub struct RmArgs {
    /// Task numbers, as shown by `list` (1-based, any order)
    #[arg(required = true)]
    pub indices: Vec<usize>,
}
