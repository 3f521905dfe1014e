use super::{Command, CommandError};
use crate::core::ShellState;
use std::env;

#[derive(Clone, Default)]
pub struct CdCommand;

impl CdCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for CdCommand {
    fn execute(&self, args: &[String], state: &mut ShellState) -> Result<(), CommandError> {
        let [path] = args else {
            return Err(CommandError::InvalidArguments(format!(
                "cd expects one directory, got {}",
                args.len()
            )));
        };

        env::set_current_dir(path)?;
        state.trace(format_args!("cwd is now {}", path));
        Ok(())
    }
}
