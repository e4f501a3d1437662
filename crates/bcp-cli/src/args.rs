use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};

/// Business Continuity Quick Capture
///
/// Walks through a four-step intake form for a Business Continuity Plan and
/// keeps one in-progress draft in local storage. Run without a subcommand to
/// start the interactive wizard.
#[derive(Parser)]
#[command(version, about, name = "bcp")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/bcp-capture/bcp.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the bcp CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Run the interactive capture wizard (the default)
    #[command(alias = "w")]
    Wizard,
    /// Print the response card for the saved draft
    #[command(alias = "c")]
    Card(CardArgs),
    /// Show whether a draft is saved and when
    #[command(alias = "s")]
    Status,
    /// Erase the saved draft
    Clear,
}

#[derive(ClapArgs)]
pub struct CardArgs {
    /// Write the card as markdown to this file instead of the terminal
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
