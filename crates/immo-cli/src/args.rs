use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{LeadCommands, TaskCommands};

/// Main command-line interface for the Immo back office
///
/// Immo is a property-management back office that tracks sales leads
/// through a fixed six-step relationship journey and mirrors each active
/// step onto a shared task board. The CLI covers the full lead lifecycle
/// (capture, qualify, advance, close) plus free-form board tasks and
/// pipeline metrics.
#[derive(Parser)]
#[command(version, about, name = "immo")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/immo/immo.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Immo CLI
///
/// The CLI is organized into two main command categories:
/// - `lead`: Operations on leads and their journeys (create, list, update,
///   complete steps, metrics)
/// - `task`: Operations on the task board (create, list, move between
///   statuses, generate recurring occurrences)
#[derive(Subcommand)]
pub enum Commands {
    /// Manage leads and their journeys
    #[command(alias = "l")]
    Lead {
        #[command(subcommand)]
        command: LeadCommands,
    },
    /// Manage the task board
    #[command(alias = "t")]
    Task {
        #[command(subcommand)]
        command: TaskCommands,
    },
}
