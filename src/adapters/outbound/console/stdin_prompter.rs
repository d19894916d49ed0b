use crate::ports::outbound::Prompter;
use crate::shared::Result;
use anyhow::Context;
use std::io::{self, BufRead, Write};

/// StdinPrompter adapter asking questions on stdout and reading answers from stdin
pub struct StdinPrompter;

impl StdinPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StdinPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for StdinPrompter {
    fn ask(&self, question: &str) -> Result<Option<String>> {
        let mut stdout = io::stdout().lock();
        stdout
            .write_all(question.as_bytes())
            .and_then(|_| stdout.flush())
            .context("Failed to write prompt to stdout")?;

        let mut line = String::new();
        let read = io::stdin()
            .lock()
            .read_line(&mut line)
            .context("Failed to read answer from stdin")?;

        if read == 0 {
            // Keep the next output off the prompt line
            writeln!(stdout).ok();
            return Ok(None);
        }

        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn say(&self, message: &str) {
        println!("{}", message);
    }
}
