use std::collections::BTreeMap;

mod cd;
mod exit;
mod paths;
mod pwd;

pub use cd::CdCommand;
pub use exit::ExitCommand;
pub use paths::PathsCommand;
pub use pwd::PwdCommand;

use crate::core::ShellState;
use crate::process::{ProcessError, ProcessExecutor};
use crate::shell::parser::Invocation;

#[derive(Debug)]
pub enum CommandError {
    InvalidArguments(String),
    Redirection(String),
    IoError(std::io::Error),
    ProcessError(ProcessError),
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandError::InvalidArguments(msg) => write!(f, "invalid arguments: {}", msg),
            CommandError::Redirection(msg) => write!(f, "invalid redirection: {}", msg),
            CommandError::IoError(err) => write!(f, "IO error: {}", err),
            CommandError::ProcessError(err) => write!(f, "Process error: {}", err),
        }
    }
}

impl std::error::Error for CommandError {}

impl From<std::io::Error> for CommandError {
    fn from(err: std::io::Error) -> Self {
        CommandError::IoError(err)
    }
}

impl From<ProcessError> for CommandError {
    fn from(err: ProcessError) -> Self {
        CommandError::ProcessError(err)
    }
}

pub trait Command {
    fn execute(&self, args: &[String], state: &mut ShellState) -> Result<(), CommandError>;
}

#[derive(Clone)]
enum CommandType {
    Cd(CdCommand),
    Exit(ExitCommand),
    Pwd(PwdCommand),
    Paths(PathsCommand),
}

impl Command for CommandType {
    fn execute(&self, args: &[String], state: &mut ShellState) -> Result<(), CommandError> {
        match self {
            CommandType::Cd(cmd) => cmd.execute(args, state),
            CommandType::Exit(cmd) => cmd.execute(args, state),
            CommandType::Pwd(cmd) => cmd.execute(args, state),
            CommandType::Paths(cmd) => cmd.execute(args, state),
        }
    }
}

/// Runs an invocation either as a built-in or as an external program.
#[derive(Clone)]
pub struct CommandExecutor {
    commands: BTreeMap<&'static str, CommandType>,
    process_executor: ProcessExecutor,
}

impl Default for CommandExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandExecutor {
    pub fn new() -> Self {
        let mut commands = BTreeMap::new();
        commands.insert("cd", CommandType::Cd(CdCommand::new()));
        commands.insert("exit", CommandType::Exit(ExitCommand::new()));
        commands.insert("pwd", CommandType::Pwd(PwdCommand::new()));
        commands.insert("paths", CommandType::Paths(PathsCommand::new()));

        Self {
            commands,
            process_executor: ProcessExecutor::new(),
        }
    }

    pub fn execute(&self, invocation: &Invocation, state: &mut ShellState) -> Result<(), CommandError> {
        let (command, args) = invocation
            .args
            .split_first()
            .ok_or_else(|| CommandError::InvalidArguments("empty command".to_string()))?;

        if let Some(cmd) = self.commands.get(command.as_str()) {
            if invocation.redirect.is_some() {
                return Err(CommandError::Redirection(format!(
                    "{} does not write to a file",
                    command
                )));
            }
            state.trace(format_args!("builtin {} {:?}", command, args));
            return cmd.execute(args, state);
        }

        if state.is_debug() {
            state.trace(format_args!(
                "external {} resolved to {:?}",
                command,
                state.paths.resolve(command)
            ));
        }
        let status = self.process_executor.spawn_process(
            &invocation.args,
            invocation.redirect.as_deref(),
            &state.paths,
            state.foreground(),
        )?;
        state.trace(format_args!("{} {}", command, status));
        Ok(())
    }
}
