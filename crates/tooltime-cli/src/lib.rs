//! tooltime - tool rental checkout at the counter
//!
//! Prices rentals from the store's tool catalog and prints the agreement the
//! customer signs.
//!
//! # Configuration
//!
//! ```text
//! ~/.tooltime/          # or $TOOLTIME_HOME
//! └── catalog.toml      # optional; replaces the standard stock
//! ```
//!
//! `--catalog PATH` (or `TOOLTIME_CATALOG`) takes precedence over both.
#![allow(missing_docs)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::doc_markdown)]

pub mod cmd;
pub mod ui;

pub use tooltime_core::{Catalog, Checkout, Holiday, RentalAgreement};
pub use tooltime_core::paths::*;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "tooltime")]
#[command(author, version, about = "tooltime - tool rental checkout at the counter")]
pub struct Cli {
    /// Tool catalog file to use instead of the standard stock
    #[arg(long, global = true, env = "TOOLTIME_CATALOG")]
    pub catalog: Option<PathBuf>,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Rent a tool and print the rental agreement
    Checkout {
        /// Tool code (e.g. JAKR)
        #[arg(long, short = 't')]
        tool: String,
        /// Number of rental days, counting the checkout day
        #[arg(long, short = 'd', allow_negative_numbers = true)]
        days: i64,
        /// Discount percentage, 0-100
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        discount: i64,
        /// Checkout date as MM/DD/YY or YYYY-MM-DD (defaults to today)
        #[arg(long)]
        date: Option<String>,
        /// Print the agreement as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the tools available for rental
    Tools,
    /// Show observed holiday dates
    Holidays {
        /// Year to show (defaults to the current year)
        #[arg(long, short = 'y')]
        year: Option<i32>,
        /// Show each holiday's next observance after today instead
        #[arg(long, conflicts_with = "year")]
        next: bool,
    },
    /// Print agreements for the reference checkout scenarios
    Demo,
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: clap_complete::Shell,
    },
}
