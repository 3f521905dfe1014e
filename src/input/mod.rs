mod script;
mod terminal;

pub use script::ScriptSource;
pub use terminal::TerminalSource;

use crate::error::ShellError;

/// Where input lines come from. `Ok(None)` means end of input.
pub trait LineSource {
    fn read_line(&mut self) -> Result<Option<String>, ShellError>;
}
