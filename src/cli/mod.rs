//! CLI module
//!
//! Command-line interface for exercising the adapter by hand.
//!
//! # Commands
//!
//! - `validate` - Run request validation without touching the network
//! - `get-page` - Validate and fetch a single page
//! - `entities` - List supported entities

mod commands;
mod runner;

pub use commands::{Cli, Commands, PageArgs};
pub use runner::Runner;
