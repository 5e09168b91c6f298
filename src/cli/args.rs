//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueHint};

/// Random path-identified tree generator with node labeling
#[derive(Parser, Debug)]
#[command(name = "randtree")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub debug: u8,

    /// Config file, layered over the global config
    #[arg(short, long, global = true, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a random tree and print it labeled
    Generate(GenerateArgs),

    /// Print the default label for an identifier
    Label {
        /// Identifier, e.g. 0.1.2
        identifier: String,
    },

    /// Manage settings
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

/// Overrides for the loaded settings; unset flags keep the configured value.
#[derive(Args, Debug, Default)]
pub struct GenerateArgs {
    /// Maximum levels below the root
    #[arg(long)]
    pub max_depth: Option<u32>,

    /// Minimum children per internal node
    #[arg(long)]
    pub min_width: Option<u32>,

    /// Maximum children per internal node
    #[arg(long)]
    pub max_width: Option<u32>,

    /// Root identifier, e.g. 0 or 0.1
    #[arg(long)]
    pub root: Option<String>,

    /// Seed for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,

    /// Also print the tree before labeling
    #[arg(long)]
    pub show_unlabeled: bool,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show effective settings as TOML
    Show,
    /// Show global config file path
    Path,
}
