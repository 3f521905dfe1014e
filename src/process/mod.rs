use std::fmt;

pub mod executor;
pub mod foreground;
pub mod signal;

pub use executor::{ChildStatus, ProcessExecutor};
pub use foreground::ForegroundChild;
pub use signal::{Forwarder, Relay};

#[derive(Debug)]
pub enum ProcessError {
    NotFound(String),
    Spawn(std::io::Error),
    Redirect(String, std::io::Error),
    Wait(std::io::Error),
    SignalError(String),
}

impl fmt::Display for ProcessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessError::NotFound(cmd) => write!(f, "Command not found: {}", cmd),
            ProcessError::Spawn(e) => write!(f, "Spawn failed: {}", e),
            ProcessError::Redirect(path, e) => write!(f, "Cannot open {}: {}", path, e),
            ProcessError::Wait(e) => write!(f, "Wait failed: {}", e),
            ProcessError::SignalError(msg) => write!(f, "Signal error: {}", msg),
        }
    }
}

impl std::error::Error for ProcessError {}
