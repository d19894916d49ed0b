use pip_orphans::prelude::*;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Mock Prompter answering from a script; an exhausted script behaves like end of input
#[derive(Default, Clone)]
pub struct MockPrompter {
    answers: Arc<Mutex<VecDeque<String>>>,
    pub questions: Arc<Mutex<Vec<String>>>,
    pub lines: Arc<Mutex<Vec<String>>>,
}

impl MockPrompter {
    pub fn new(answers: &[&str]) -> Self {
        Self {
            answers: Arc::new(Mutex::new(
                answers.iter().map(|a| a.to_string()).collect(),
            )),
            ..Default::default()
        }
    }

    pub fn get_questions(&self) -> Vec<String> {
        self.questions.lock().unwrap().clone()
    }

    pub fn get_lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }
}

impl Prompter for MockPrompter {
    fn ask(&self, question: &str) -> Result<Option<String>> {
        self.questions.lock().unwrap().push(question.to_string());
        Ok(self.answers.lock().unwrap().pop_front())
    }

    fn say(&self, message: &str) {
        self.lines.lock().unwrap().push(message.to_string());
    }
}
