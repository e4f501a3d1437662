//! BCP Quick Capture CLI
//!
//! Terminal front end for the capture wizard: an interactive shell by
//! default, plus one-shot commands for the saved draft.

mod args;
mod cli;
mod commands;
mod renderer;
mod shell;

use std::io;

use anyhow::{Context, Result};
use args::{Args, Commands};
use bcp_core::WizardBuilder;
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;
use shell::Shell;

fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        command,
    } = Args::parse();

    let builder = WizardBuilder::new().with_database_path(database_file);
    let renderer = TerminalRenderer::new(!no_color);

    info!("BCP Quick Capture started");

    match command {
        None | Some(Commands::Wizard) => {
            let wizard = builder.build().context("Failed to open draft storage")?;
            Shell::new(wizard, renderer).run(io::stdin().lock())
        }
        Some(Commands::Card(args)) => {
            let store = builder.build_store().context("Failed to open draft storage")?;
            Cli::new(store, renderer).card(args.output.as_deref())
        }
        Some(Commands::Status) => {
            let store = builder.build_store().context("Failed to open draft storage")?;
            Cli::new(store, renderer).status();
            Ok(())
        }
        Some(Commands::Clear) => {
            let store = builder.build_store().context("Failed to open draft storage")?;
            Cli::new(store, renderer).clear();
            Ok(())
        }
    }
}
