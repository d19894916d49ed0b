use clap::Parser;
use std::path::PathBuf;

use pip_orphans::application::dto::OutputFormat;
use pip_orphans::config::CliOverrides;

/// List installed Python packages, detect orphaned ones, and uninstall them interactively
#[derive(Parser, Debug)]
#[command(name = "pip-orphans")]
#[command(version)]
#[command(
    about = "List installed Python packages, detect orphaned ones, and uninstall them interactively",
    long_about = None
)]
pub struct Args {
    /// Python interpreter whose environment is inspected [default: python3]
    #[arg(long, value_name = "PATH")]
    pub python: Option<String>,

    /// Report format: table or json [default: table]
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Print the report and exit without offering to uninstall anything
    #[arg(long)]
    pub list_only: bool,

    /// Do not install pipdeptree automatically when it is missing
    #[arg(long)]
    pub no_install: bool,

    /// Path to a config file (defaults to ./pip-orphans.config.yml when present)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Values that take precedence over the config file
    pub fn overrides(&self) -> CliOverrides {
        CliOverrides {
            python: self.python.clone(),
            format: self.format,
            no_install: self.no_install,
            list_only: self.list_only,
        }
    }
}
