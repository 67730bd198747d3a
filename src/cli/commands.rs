//! CLI commands and argument parsing

use crate::adapter::{API_HOST, MAX_PAGE_SIZE};
use crate::entity::TEAMS;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// PagerDuty paginated adapter CLI
#[derive(Parser, Debug)]
#[command(name = "pagerduty-adapter")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Adapter settings file (YAML)
    #[arg(short, long, global = true)]
    pub settings: Option<PathBuf>,

    /// Datasource config file (YAML or JSON)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate a page request without calling the datasource
    Validate {
        #[command(flatten)]
        page: PageArgs,
    },

    /// Fetch one page and print it as JSON
    GetPage {
        #[command(flatten)]
        page: PageArgs,
    },

    /// List supported entities
    Entities,
}

/// Fields of a page request
#[derive(Args, Debug, Clone)]
pub struct PageArgs {
    /// Datasource address
    #[arg(long, default_value = API_HOST)]
    pub address: String,

    /// Authorization header value (falls back to PAGERDUTY_TOKEN)
    #[arg(long)]
    pub token: Option<String>,

    /// Entity external ID
    #[arg(short, long, default_value = TEAMS)]
    pub entity: String,

    /// Requested attributes (comma-separated)
    #[arg(short, long, value_delimiter = ',', default_value = "id")]
    pub attributes: Vec<String>,

    /// Records per page
    #[arg(short, long, default_value_t = MAX_PAGE_SIZE)]
    pub page_size: u64,

    /// Cursor returned by the previous page
    #[arg(long, default_value = "")]
    pub cursor: String,

    /// Request results ordered by unique ID
    #[arg(long)]
    pub ordered: bool,
}
