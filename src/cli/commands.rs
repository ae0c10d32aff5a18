//! CLI command definitions

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "figmd")]
#[command(about = "Convert {{<figure>}} shortcodes to markdown images", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Without a subcommand, an interactive menu asks what to rewrite
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Rewrite a single file in place
    File {
        /// File to rewrite
        path: PathBuf,
    },

    /// Rewrite every matching file below a directory
    Dir {
        /// Directory to walk (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Comma-separated file extensions (default: .md,.markdown,.txt)
        #[arg(short, long, value_name = "LIST")]
        ext: Option<String>,
    },
}
