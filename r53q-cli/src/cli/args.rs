//! Command-line argument definitions.

use clap::{Args, Parser, Subcommand};

/// Query Route 53 hosted zones and record sets
#[derive(Parser, Debug)]
#[command(name = "r53q", disable_version_flag = true)]
pub struct Cli {
    #[command(flatten)]
    pub options: Options,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Flags that apply outside any subcommand
#[derive(Args, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Options {
    /// Show version & config path, then exit
    #[arg(short = 'v', long = "version")]
    pub version: bool,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// List hosted zones or the records of one zone
    List {
        #[command(subcommand)]
        target: Option<ListTarget>,
    },

    /// Return a zone's ID/name (default) or record count
    Zone {
        /// Hosted zone id or domain name
        #[arg(value_name = "ZONE_ID|DOMAIN")]
        identifier: String,

        /// Pass `count` to print the number of record sets instead
        mode: Option<String>,
    },
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum ListTarget {
    /// List all hosted zones
    Zones,

    /// List all records in a zone
    Records {
        /// Hosted zone id or domain name
        #[arg(value_name = "ZONE_ID|DOMAIN")]
        identifier: String,
    },
}

/// Whether a `zone` mode argument asks for the record count.
pub fn is_count_mode(mode: Option<&str>) -> bool {
    mode.is_some_and(|m| m.eq_ignore_ascii_case("count"))
}
