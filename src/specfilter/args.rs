use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "specfilter")]
#[command(about = "Filter countries with composable specifications", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding config.json (defaults to the user config dir)
    #[arg(long, global = true, value_name = "DIR")]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the two sample specifications (default)
    Demo,

    /// List every configured country
    #[command(alias = "ls")]
    List,

    /// Show countries matching attr=value terms
    #[command(alias = "f")]
    Filter {
        /// Terms such as continent=europe or language=german
        #[arg(required = true, num_args = 1..)]
        terms: Vec<String>,

        /// Match any term instead of all of them
        #[arg(long, conflicts_with = "all")]
        any: bool,

        /// Match all terms (overrides the configured combinator)
        #[arg(long)]
        all: bool,
    },
}
