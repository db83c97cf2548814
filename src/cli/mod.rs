//! CLI argument parsing types.
//!
//! This module provides the command-line interface structure for the ebay-finding binary.

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::GlobalId;

/// eBay Finding API command-line interface.
#[derive(Parser, Debug)]
#[command(name = "ebay-finding", about = "eBay Finding API CLI", version)]
pub struct Cli {
    /// Output format.
    #[arg(long, global = true, value_enum, default_value_t = Format::Table)]
    pub format: Format,

    /// Shorthand for `--format json`.
    #[arg(long, global = true, default_value = "false")]
    pub json: bool,

    /// eBay application id.
    #[arg(long, global = true, env = "EBAY_APP_ID", hide_env_values = true)]
    pub app_id: Option<String>,

    /// Override the Finding Service endpoint.
    #[arg(long, global = true, env = "EBAY_FINDING_URL")]
    pub endpoint: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// The effective output format, honoring `--json`.
    pub fn output_format(&self) -> Format {
        if self.json {
            Format::Json
        } else {
            self.format
        }
    }
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Search active listings by keywords.
    Search {
        #[command(flatten)]
        query: QueryArgs,

        /// Only auction listings with a Buy-It-Now option.
        #[arg(long)]
        bin_only: bool,
    },

    /// Search sold listings in used or unspecified condition.
    #[command(alias = "completed")]
    Sold {
        #[command(flatten)]
        query: QueryArgs,
    },
}

/// Arguments shared by both searches.
#[derive(Args, Debug)]
pub struct QueryArgs {
    /// Search keywords.
    #[arg(required = true, num_args = 1..)]
    pub keywords: Vec<String>,

    /// Marketplace to search (us, fr, de, it, es or EBAY-XX).
    #[arg(long, short, default_value = "EBAY-US")]
    pub site: GlobalId,

    /// Number of listings to return.
    #[arg(long, short = 'n', default_value = "10")]
    pub count: u32,
}

impl QueryArgs {
    /// Keywords joined the way they are sent to the service.
    pub fn keywords(&self) -> String {
        self.keywords.join(" ")
    }
}

/// How results are written to stdout.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    /// One row per listing.
    Table,
    /// The full diagnostic dump.
    Pretty,
    /// JSON.
    Json,
}
