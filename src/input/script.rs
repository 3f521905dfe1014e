use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use super::LineSource;
use crate::error::ShellError;

/// Batch input: a script file or non-terminal stdin. Never prompts.
pub struct ScriptSource<R> {
    reader: R,
}

impl ScriptSource<BufReader<File>> {
    pub fn open(path: &Path) -> Result<Self, ShellError> {
        let file = File::open(path)
            .map_err(|e| ShellError::Script(path.display().to_string(), e))?;
        Ok(Self::new(BufReader::new(file)))
    }
}

impl ScriptSource<io::StdinLock<'static>> {
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock())
    }
}

impl<R: BufRead> ScriptSource<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> LineSource for ScriptSource<R> {
    fn read_line(&mut self) -> Result<Option<String>, ShellError> {
        let mut buf = Vec::new();
        loop {
            match self.reader.read_until(b'\n', &mut buf) {
                Ok(0) => return Ok(None),
                Ok(_) => return Ok(Some(String::from_utf8_lossy(&buf).into_owned())),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }
    }
}
