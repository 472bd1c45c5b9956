use clap::Parser;
use std::path::PathBuf;

use rdeps::application::dto::OutputFormat;

/// Show the formulae that use the given formulae
#[derive(Parser, Debug)]
#[command(name = "rdeps")]
#[command(version)]
#[command(
    about = "Show the formulae that specify the given formulae as a dependency",
    long_about = "Show the formulae that specify the given formulae as a dependency.\n\n\
                  By default only direct dependents through required and recommended \
                  dependencies are listed. When given multiple formulae, formulae that \
                  use any of them are shown."
)]
pub struct Args {
    /// Formulae to find dependents of
    #[arg(required = true, value_name = "FORMULA")]
    pub formulae: Vec<String>,

    /// Formula index file, or a directory containing formulae.toml [default: formulae.toml]
    #[arg(long = "formulae", value_name = "PATH", env = "RDEPS_FORMULAE")]
    pub formulae_path: Option<PathBuf>,

    /// Cellar directory used to determine installation state
    #[arg(long, value_name = "PATH", env = "RDEPS_CELLAR")]
    pub cellar: Option<PathBuf>,

    /// Output format: text or json
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Path to a config file (defaults to ./rdeps.config.yml when present)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Resolve dependencies recursively, listing formulae that use the given
    /// formulae indirectly too
    #[arg(long)]
    pub recursive: bool,

    /// Only list formulae that are currently installed
    #[arg(long, conflicts_with = "missing")]
    pub installed: bool,

    /// Only list formulae that are not installed in any version
    #[arg(long)]
    pub missing: bool,

    /// Include build-time dependencies
    #[arg(long)]
    pub include_build: bool,

    /// Include test dependencies
    #[arg(long)]
    pub include_test: bool,

    /// Include optional dependencies
    #[arg(long)]
    pub include_optional: bool,

    /// Skip recommended dependencies
    #[arg(long)]
    pub skip_recommended: bool,

    /// Still match dependencies by name for formulae that are not in the index
    #[arg(long)]
    pub match_missing: bool,

    /// Print progress messages to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
