use std::io::Write;

use super::{Command, CommandError};
use crate::core::ShellState;

#[derive(Clone, Default)]
pub struct ExitCommand;

impl ExitCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for ExitCommand {
    /// Terminates the interpreter with status 0. Arguments are rejected and
    /// the interpreter keeps running.
    fn execute(&self, args: &[String], state: &mut ShellState) -> Result<(), CommandError> {
        if !args.is_empty() {
            return Err(CommandError::InvalidArguments(
                "exit takes no arguments".to_string(),
            ));
        }

        state.trace(format_args!("exit"));
        let _ = std::io::stdout().flush();
        std::process::exit(0);
    }
}
