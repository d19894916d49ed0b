/// Use cases module containing application business logic orchestration
mod interactive_uninstall;
mod scan_environment;

#[cfg(test)]
mod test_fakes;

pub use interactive_uninstall::InteractiveUninstallUseCase;
pub use scan_environment::ScanEnvironmentUseCase;
