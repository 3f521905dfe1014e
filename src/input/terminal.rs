use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use super::LineSource;
use crate::error::ShellError;

/// Live terminal input with a prompt.
pub struct TerminalSource {
    editor: DefaultEditor,
    prompt: String,
}

impl TerminalSource {
    pub fn new(prompt: &str) -> Result<Self, ShellError> {
        Ok(Self {
            editor: DefaultEditor::new()?,
            prompt: prompt.to_string(),
        })
    }
}

impl LineSource for TerminalSource {
    fn read_line(&mut self) -> Result<Option<String>, ShellError> {
        loop {
            match self.editor.readline(&self.prompt) {
                Ok(line) => return Ok(Some(line)),
                // Ctrl-C while editing drops the line and prompts again
                Err(ReadlineError::Interrupted) => continue,
                Err(ReadlineError::Eof) => return Ok(None),
                Err(e) => return Err(e.into()),
            }
        }
    }
}
