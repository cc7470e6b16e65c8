//! Clap argument surface for the rstoc binary

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};

/// Rebuild hierarchical help tables of contents from indented wiki outlines
#[derive(Parser, Debug)]
#[command(name = "rstoc")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-d info, -dd debug, -ddd trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub debug: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build the outline and emit TOC markup
    Build {
        /// Outline source file
        #[arg(value_hint = ValueHint::FilePath)]
        source: PathBuf,

        /// Write markup to this file instead of stdout
        #[arg(short, long, value_hint = ValueHint::FilePath)]
        output: Option<PathBuf>,

        /// Language tag used when the source has no lang: header
        #[arg(short, long)]
        lang: Option<String>,
    },

    /// Show the reconstructed outline as a tree
    Tree {
        /// Outline source file
        #[arg(value_hint = ValueHint::FilePath)]
        source: PathBuf,
    },

    /// Print topic ids in document order, one per line
    Trace {
        /// Outline source file
        #[arg(value_hint = ValueHint::FilePath)]
        source: PathBuf,
    },

    /// Inspect or bootstrap settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Print the effective settings as TOML
    Show,

    /// Print the global config file path
    Path,

    /// Write a starter config file
    Init,
}
