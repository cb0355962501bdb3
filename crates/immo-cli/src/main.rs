//! Immo CLI Application
//!
//! Command-line interface for the Immo property-management back office.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use immo_core::{params::ListLeads, DeskBuilder};
use log::info;
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args { database_file, no_color, command } = Args::parse();

    let desk = DeskBuilder::new()
        .with_database_path(database_file)
        .build()
        .await
        .context("Failed to initialize desk")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("Immo started");

    match command {
        Some(Lead { command }) => Cli::new(desk, renderer).handle_lead_command(command).await,
        Some(Task { command }) => Cli::new(desk, renderer).handle_task_command(command).await,
        None => {
            Cli::new(desk, renderer)
                .list_leads(&ListLeads::default())
                .await
        }
    }
}
