//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use mediabound::{Axis, BreakpointReference};

/// Resolve named breakpoints and print media query blocks.
#[derive(Debug, Parser)]
#[command(name = "mediabound", version)]
pub struct Cli {
    /// Breakpoint configuration file (.yaml, .yml or .json)
    #[arg(long, short, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Measure ranges on this axis, overriding the config
    #[arg(long, global = true, value_name = "width|height")]
    pub axis: Option<Axis>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the pixel value a reference resolves to
    Resolve {
        /// A pixel value, a breakpoint name, or `none`
        #[arg(allow_negative_numbers = true, value_parser = parse_reference)]
        reference: BreakpointReference,
    },
    /// Print the media block for a min/max pair
    Query {
        /// Lower bound, inclusive
        #[arg(long, value_name = "REF", allow_negative_numbers = true, value_parser = parse_reference)]
        min: Option<BreakpointReference>,
        /// Upper bound, exclusive
        #[arg(long, value_name = "REF", allow_negative_numbers = true, value_parser = parse_reference)]
        max: Option<BreakpointReference>,
        /// Declarations to place inside the block
        #[arg(long, default_value = "")]
        content: String,
        /// Print only the media condition
        #[arg(long)]
        condition: bool,
    },
    /// List the breakpoints in the active table
    List,
}

fn parse_reference(s: &str) -> Result<BreakpointReference, std::convert::Infallible> {
    s.parse()
}
