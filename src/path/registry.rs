use std::ffi::CString;
use std::os::unix::ffi::OsStrExt;
use std::path::{Path, PathBuf};

pub const DEFAULT_PATH: &str = "/bin";

/// Ordered directories searched for external commands.
///
/// Duplicates are kept and an empty registry is legal: nothing resolves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathRegistry {
    dirs: Vec<String>,
}

impl Default for PathRegistry {
    fn default() -> Self {
        Self {
            dirs: vec![DEFAULT_PATH.to_string()],
        }
    }
}

impl PathRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Discards every entry and copies in `dirs`, keeping their order.
    pub fn replace<I, S>(&mut self, dirs: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.dirs = dirs.into_iter().map(|d| d.as_ref().to_owned()).collect();
    }

    pub fn dirs(&self) -> &[String] {
        &self.dirs
    }

    pub fn is_empty(&self) -> bool {
        self.dirs.is_empty()
    }

    /// First `<dir>/<name>` that is an executable file, in registry order.
    pub fn resolve(&self, name: &str) -> Option<PathBuf> {
        self.dirs
            .iter()
            .map(|dir| PathBuf::from(format!("{}/{}", dir, name)))
            .find(|candidate| is_executable(candidate))
    }
}

fn is_executable(path: &Path) -> bool {
    if !path.is_file() {
        return false;
    }
    match CString::new(path.as_os_str().as_bytes()) {
        Ok(c_path) => unsafe { libc::access(c_path.as_ptr(), libc::X_OK) == 0 },
        Err(_) => false,
    }
}
