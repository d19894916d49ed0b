use crate::shared::Result;

/// Prompter port for interactive questions
pub trait Prompter {
    /// Shows `question` and reads one line of input
    ///
    /// # Returns
    /// The raw answer without the trailing newline, or `None` when input is exhausted
    ///
    /// # Errors
    /// Returns an error if reading or writing the console fails
    fn ask(&self, question: &str) -> Result<Option<String>>;

    /// Shows an informational line that needs no answer
    fn say(&self, message: &str);
}
