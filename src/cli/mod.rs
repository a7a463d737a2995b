pub mod commands;

use clap::{Parser, Subcommand};

use crate::feed::DEFAULT_PAGE_SIZE;

#[derive(Parser)]
#[command(name = "newsreel")]
#[command(about = "An offline-first terminal news reader", long_about = None)]
pub struct Cli {
    /// Path to the article database (default: platform data directory)
    #[arg(long, global = true)]
    pub db: Option<std::path::PathBuf>,

    /// Articles per page
    #[arg(
        short,
        long,
        default_value_t = DEFAULT_PAGE_SIZE,
        global = true,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub page_size: u32,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch the news collection and refresh the local cache
    Fetch,
    /// Print a page of cached articles
    List {
        /// Page number, 1-based
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        page: u32,
    },
    /// Launch the interactive reader (default)
    Tui,
}
