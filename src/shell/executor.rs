use crate::core::commands::CommandError;

use super::parser::{parse, tokenize};

pub trait CommandHandler {
    fn execute_command(&mut self, line: &str) -> Result<(), CommandError>;
}

impl CommandHandler for super::Shell {
    fn execute_command(&mut self, line: &str) -> Result<(), CommandError> {
        let Some(invocation) = parse(tokenize(line))? else {
            return Ok(());
        };
        self.executor.execute(&invocation, &mut self.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flags::Flags;
    use crate::input::ScriptSource;
    use crate::process::ProcessError;
    use crate::shell::Shell;
    use std::io::Cursor;

    fn batch_shell() -> Shell {
        Shell::with_source(
            Box::new(ScriptSource::new(Cursor::new(""))),
            false,
            &Flags::new(),
        )
    }

    #[test]
    fn test_blank_lines_are_noops() {
        let mut shell = batch_shell();
        for line in ["", "\n", "   \t \n"] {
            assert!(shell.execute_command(line).is_ok());
        }
        assert_eq!(shell.state().paths.dirs(), &["/bin"]);
    }

    #[test]
    fn test_paths_then_unresolvable_command() {
        let mut shell = batch_shell();
        shell.execute_command("paths\n").unwrap();
        assert!(shell.state().paths.is_empty());

        assert!(matches!(
            shell.execute_command("ls\n"),
            Err(CommandError::ProcessError(ProcessError::NotFound(_)))
        ));
    }

    #[test]
    fn test_exit_with_extra_argument_survives() {
        let mut shell = batch_shell();
        assert!(matches!(
            shell.execute_command("exit extra\n"),
            Err(CommandError::InvalidArguments(_))
        ));
    }

    #[test]
    fn test_builtin_redirect_rejected() {
        let mut shell = batch_shell();
        assert!(matches!(
            shell.execute_command("paths /usr/bin > out.txt\n"),
            Err(CommandError::Redirection(_))
        ));
        assert_eq!(shell.state().paths.dirs(), &["/bin"]);
    }

    #[test]
    fn test_malformed_redirect_rejected_before_dispatch() {
        let mut shell = batch_shell();
        assert!(matches!(
            shell.execute_command("paths > a b\n"),
            Err(CommandError::Redirection(_))
        ));
        assert_eq!(shell.state().paths.dirs(), &["/bin"]);
    }
}
