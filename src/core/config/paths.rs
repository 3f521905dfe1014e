use std::path::PathBuf;

use crate::flags::Flags;

pub const RC_FILE_NAME: &str = ".cmpshrc";

#[derive(Debug, Clone)]
pub struct ConfigPaths {
    pub rc_path: Option<PathBuf>,
    /// Whether the rc file was named on the command line and so must exist.
    pub explicit: bool,
}

impl ConfigPaths {
    /// `--config` wins; otherwise interactive shells look for `~/.cmpshrc`.
    pub fn new(flags: &Flags, interactive: bool) -> Self {
        if let Some(path) = flags.get_value("config") {
            return ConfigPaths {
                rc_path: Some(PathBuf::from(path)),
                explicit: true,
            };
        }

        let rc_path = if interactive {
            dirs::home_dir().map(|home| home.join(RC_FILE_NAME))
        } else {
            None
        };

        ConfigPaths {
            rc_path,
            explicit: false,
        }
    }
}
