//! CLI command definitions using clap.
//!
//! Defines the main CLI structure and subcommands:
//! - serve: run the HTTP service (default)
//! - route: route a single query and print the decision
//! - tools: print the tool catalog

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// toolroute - route natural-language requests to a single tool call
#[derive(Parser, Debug)]
#[command(name = "toolroute")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Optional config file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Check if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }
}

/// Main subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the HTTP service
    Serve {
        /// Listen address, overrides the config file
        #[arg(short, long)]
        bind: Option<String>,
    },

    /// Route one query and print the selected tool call
    Route {
        /// Free-text request
        query: String,
    },

    /// Print the tool catalog as sent to the model
    Tools,
}
