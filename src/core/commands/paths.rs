use super::{Command, CommandError};
use crate::core::ShellState;

#[derive(Clone, Default)]
pub struct PathsCommand;

impl PathsCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for PathsCommand {
    fn execute(&self, args: &[String], state: &mut ShellState) -> Result<(), CommandError> {
        state.paths.replace(args);
        state.trace(format_args!("paths are now {:?}", state.paths.dirs()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_with_no_arguments_empties_registry() {
        let mut state = ShellState::new(false);
        PathsCommand::new().execute(&[], &mut state).unwrap();
        assert!(state.paths.is_empty());
    }

    #[test]
    fn test_paths_copies_each_argument() {
        let mut state = ShellState::new(false);
        let args = vec!["/usr/bin".to_string(), "/bin".to_string()];
        PathsCommand::new().execute(&args, &mut state).unwrap();
        assert_eq!(state.paths.dirs(), &["/usr/bin", "/bin"]);
    }
}
