mod cli;

use cli::Args;
use pip_orphans::adapters::outbound::console::{
    StderrProgressReporter, StdinPrompter, StdoutPresenter,
};
use pip_orphans::adapters::outbound::python::PipClient;
use pip_orphans::application::dto::{OutputFormat, ScanRequest, UninstallRequest};
use pip_orphans::application::factories::FormatterFactory;
use pip_orphans::application::read_models::ReportReadModelBuilder;
use pip_orphans::application::use_cases::{InteractiveUninstallUseCase, ScanEnvironmentUseCase};
use pip_orphans::config::{self, ConfigFile, Settings};
use pip_orphans::ports::outbound::OutputPresenter;
use pip_orphans::shared::error::ExitCode;
use pip_orphans::shared::Result;
use std::path::Path;
use std::process;

fn main() {
    if let Err(e) = run() {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

fn run() -> Result<()> {
    // Parse command-line arguments (clap exits with 2 on invalid input)
    let args = Args::parse_args();

    // Resolve settings: CLI > config file > defaults
    let config = load_config(args.config.as_deref())?;
    let settings = Settings::resolve(args.overrides(), config)?;

    // Create adapters (Dependency Injection)
    let pip = PipClient::new(settings.python.clone())?;

    // Scan the environment
    let scan_use_case =
        ScanEnvironmentUseCase::new(pip.clone(), pip.clone(), StderrProgressReporter::new());
    let response = scan_use_case.execute(ScanRequest::new(settings.auto_install))?;

    // Display progress message
    eprintln!("{}", FormatterFactory::progress_message(settings.format));

    // Format and present the report
    let model = ReportReadModelBuilder::build(&response.records, &response.orphans);
    let formatter = FormatterFactory::create(settings.format);
    let presenter = StdoutPresenter::new();
    presenter.present(&formatter.format(&model)?)?;

    if !should_prompt(&settings) {
        return Ok(());
    }

    // Offer to remove the orphans
    let uninstall_use_case =
        InteractiveUninstallUseCase::new(pip, StdinPrompter::new(), StderrProgressReporter::new());
    uninstall_use_case.execute(UninstallRequest::new(
        response.orphans,
        settings.confirm_each,
    ))?;

    Ok(())
}

/// Loads the explicit config file, or the one in the current directory if present
fn load_config(explicit: Option<&Path>) -> Result<Option<ConfigFile>> {
    match explicit {
        Some(path) => config::load_config_from_path(path).map(Some),
        None => {
            let cwd = std::env::current_dir()?;
            config::discover_config(&cwd)
        }
    }
}

/// JSON output is meant for scripts, so it never prompts
fn should_prompt(settings: &Settings) -> bool {
    !settings.list_only && settings.format == OutputFormat::Table
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn settings(format: OutputFormat, list_only: bool) -> Settings {
        Settings {
            python: "python3".to_string(),
            format,
            auto_install: true,
            confirm_each: true,
            list_only,
        }
    }

    #[test]
    fn test_should_prompt_for_table() {
        assert!(should_prompt(&settings(OutputFormat::Table, false)));
    }

    #[test]
    fn test_should_not_prompt_when_list_only() {
        assert!(!should_prompt(&settings(OutputFormat::Table, true)));
    }

    #[test]
    fn test_should_not_prompt_for_json() {
        assert!(!should_prompt(&settings(OutputFormat::Json, false)));
    }

    #[test]
    fn test_load_config_explicit_path() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("custom.yml");
        fs::write(&path, "confirm_each: false\n").unwrap();

        let config = load_config(Some(&path)).unwrap().unwrap();
        assert_eq!(config.confirm_each, Some(false));
    }

    #[test]
    fn test_load_config_explicit_path_missing() {
        let result = load_config(Some(Path::new("/nonexistent/pip-orphans.yml")));
        assert!(result.is_err());
    }
}
