/// Python environment adapters driving pip and pipdeptree as subprocesses
mod pip_client;
mod pip_output;

pub use pip_client::{PipClient, DEFAULT_PYTHON};
pub use pip_output::{parse_pip_list, parse_pipdeptree};
