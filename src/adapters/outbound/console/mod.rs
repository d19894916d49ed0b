/// Console adapters for terminal interaction
mod progress_reporter;
mod stdin_prompter;
mod stdout_presenter;

pub use progress_reporter::StderrProgressReporter;
pub use stdin_prompter::StdinPrompter;
pub use stdout_presenter::StdoutPresenter;
