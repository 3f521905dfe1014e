use std::env;
use std::io::{self, Write};
use std::os::unix::ffi::OsStrExt;

use super::{Command, CommandError};
use crate::core::ShellState;

#[derive(Clone, Default)]
pub struct PwdCommand;

impl PwdCommand {
    pub fn new() -> Self {
        Self
    }

    pub fn write_cwd<W: Write>(&self, out: &mut W) -> Result<(), CommandError> {
        let cwd = env::current_dir()?;
        out.write_all(cwd.as_os_str().as_bytes())?;
        out.write_all(b"\n")?;
        out.flush()?;
        Ok(())
    }
}

impl Command for PwdCommand {
    fn execute(&self, args: &[String], _state: &mut ShellState) -> Result<(), CommandError> {
        if !args.is_empty() {
            return Err(CommandError::InvalidArguments(
                "pwd takes no arguments".to_string(),
            ));
        }
        self.write_cwd(&mut io::stdout().lock())
    }
}
