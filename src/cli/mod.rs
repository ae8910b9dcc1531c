//! CLI module for toolroute - command-line interface and subcommands.
//!
//! Provides the main entry point with subcommands for serving, one-shot
//! routing, and catalog inspection.

pub mod commands;

pub use commands::Cli;
