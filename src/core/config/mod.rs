use std::fmt;

mod loader;
mod paths;

use crate::flags::Flags;
use loader::ConfigLoader;
pub use paths::{ConfigPaths, RC_FILE_NAME};

/// Startup settings: the prompt and the rc file run before the first line.
pub struct Config {
    paths: ConfigPaths,
    prompt: &'static str,
}

pub const PROMPT: &str = "cmpsh> ";

impl Config {
    pub fn new(flags: &Flags, interactive: bool) -> Self {
        Config {
            paths: ConfigPaths::new(flags, interactive),
            prompt: PROMPT,
        }
    }

    pub fn prompt(&self) -> &'static str {
        self.prompt
    }

    pub fn rc_path(&self) -> Option<&std::path::Path> {
        self.paths.rc_path.as_deref()
    }

    pub fn load(&self) -> Result<Vec<String>, ConfigError> {
        ConfigLoader::new(&self.paths).load_commands()
    }
}

#[derive(Debug)]
pub enum ConfigError {
    ConfigFileUnreadable(String, std::io::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ConfigFileUnreadable(path, e) => {
                write!(f, "Config file {} unreadable: {}", path, e)
            }
        }
    }
}

impl std::error::Error for ConfigError {}
