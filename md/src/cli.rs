//! CLI argument parsing for mediator-demo

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::event::EventId;

#[derive(Parser, Debug)]
#[command(name = "md")]
#[command(author, version, about = "Two components coordinated by a mediator", long_about = None)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(short, long)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Command {
    /// Trigger operations through the client (default: configured scenario)
    Run {
        /// Operations to trigger, in order (A, B, C, D)
        events: Vec<EventId>,
    },

    /// Show which operations the mediator triggers for each event
    Rules,
}
