//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `check`: Scan source files, diff against translation files, write the report
//! - `init`: Initialize a `.transcovrc.json` configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Check(cmd)) => cmd.common.verbose,
            Some(Command::Init(cmd)) => cmd.common.verbose,
            None => false,
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Project root: where the config file is searched from and paths are resolved against
    #[arg(long, env = "TRANSCOV_SOURCE_ROOT")]
    pub source_root: Option<PathBuf>,

    /// Enable verbose output (dynamic keys, unused keys, debug logs)
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Where to write the JSON report (overrides config file)
    #[arg(long)]
    pub report_path: Option<PathBuf>,

    /// Do not write the JSON report
    #[arg(long, conflicts_with = "report_path")]
    pub no_report: bool,

    /// Language to report on; repeat for several (default: all loaded languages)
    #[arg(long = "language", short = 'l', value_name = "LANG")]
    pub languages: Vec<String>,

    /// Namespace for keys without a separator (overrides config file)
    #[arg(long)]
    pub default_namespace: Option<String>,

    /// Exit with status 1 when any translation is missing
    #[arg(long)]
    pub fail_on_missing: bool,
}

#[derive(Debug, Args)]
pub struct InitCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Find missing and unused translations and write a coverage report
    Check(CheckCommand),
    /// Initialize a new .transcovrc.json configuration file
    Init(InitCommand),
}
