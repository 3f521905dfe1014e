use std::io::{self, IsTerminal};
use std::path::Path;
use std::sync::Arc;

mod executor;
pub mod parser;

use crate::{
    core::{
        commands::CommandExecutor,
        config::{Config, PROMPT},
        ShellState,
    },
    error::ShellError,
    flags::Flags,
    input::{LineSource, ScriptSource, TerminalSource},
    process::Forwarder,
};

pub use executor::CommandHandler;

pub struct Shell {
    pub(crate) source: Box<dyn LineSource>,
    pub(crate) state: ShellState,
    pub(crate) config: Config,
    pub(crate) executor: CommandExecutor,
    pub(crate) interactive: bool,
}

impl Shell {
    /// Picks the input source: the script argument, the terminal, or piped
    /// stdin. Only the terminal is interactive.
    pub fn new(flags: &Flags) -> Result<Self, ShellError> {
        let (source, interactive): (Box<dyn LineSource>, bool) = match flags.script() {
            Some(script) => (Box::new(ScriptSource::open(Path::new(script))?), false),
            None if io::stdin().is_terminal() => (Box::new(TerminalSource::new(PROMPT)?), true),
            None => (Box::new(ScriptSource::stdin()), false),
        };

        Ok(Self::with_source(source, interactive, flags))
    }

    pub fn with_source(source: Box<dyn LineSource>, interactive: bool, flags: &Flags) -> Self {
        Shell {
            source,
            state: ShellState::new(flags.is_set("debug")),
            config: Config::new(flags, interactive),
            executor: CommandExecutor::new(),
            interactive,
        }
    }

    pub fn state(&self) -> &ShellState {
        &self.state
    }

    pub fn run(&mut self) -> Result<(), ShellError> {
        let prompt = self.interactive.then(|| self.config.prompt().to_string());
        let forwarder = Forwarder::install(
            Arc::clone(self.state.foreground()),
            prompt,
            self.state.is_debug(),
        )?;

        self.state.trace(format_args!(
            "{} mode",
            if self.interactive { "interactive" } else { "batch" }
        ));
        self.run_rc();

        while let Some(line) = self.next_line() {
            if let Err(e) = self.execute_command(&line) {
                self.state.fail(&e);
            }
        }

        self.state.trace(format_args!("end of input"));
        forwarder.close();
        Ok(())
    }

    fn run_rc(&mut self) {
        let commands = match self.config.load() {
            Ok(commands) => commands,
            Err(e) => {
                self.state.fail(&e);
                return;
            }
        };

        if let Some(path) = self.config.rc_path() {
            self.state.trace(format_args!(
                "{} rc commands from {}",
                commands.len(),
                path.display()
            ));
        }
        for line in commands {
            if let Err(e) = self.execute_command(&line) {
                self.state.fail(&e);
            }
        }
    }

    fn next_line(&mut self) -> Option<String> {
        match self.source.read_line() {
            Ok(line) => line,
            Err(e) => {
                self.state.fail(&e);
                None
            }
        }
    }
}
