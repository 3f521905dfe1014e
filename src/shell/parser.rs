use std::path::PathBuf;

use crate::core::commands::CommandError;

pub const REDIRECT: &str = ">";

/// One command line after redirection has been split off.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub args: Vec<String>,
    pub redirect: Option<PathBuf>,
}

const SEPARATORS: [char; 4] = [' ', '\t', '\n', '\r'];

/// Splits on runs of space, tab, newline and carriage return. No quoting, no
/// escapes, no token limit.
pub fn tokenize(line: &str) -> Vec<String> {
    line.split(SEPARATORS)
        .filter(|token| !token.is_empty())
        .map(String::from)
        .collect()
}

/// Extracts a trailing `> file`. Returns `None` for an empty line.
///
/// `>` must be followed by exactly one word and nothing else, and there must
/// be a command before it.
pub fn parse(mut tokens: Vec<String>) -> Result<Option<Invocation>, CommandError> {
    if tokens.is_empty() {
        return Ok(None);
    }

    let redirect = match tokens.iter().position(|token| token == REDIRECT) {
        None => None,
        Some(at) => {
            let tail = tokens.split_off(at);
            match tail.as_slice() {
                [_, target] if target != REDIRECT => Some(PathBuf::from(target)),
                [_] => {
                    return Err(CommandError::Redirection(
                        "missing output file".to_string(),
                    ))
                }
                _ => {
                    return Err(CommandError::Redirection(format!(
                        "expected one output file, got {:?}",
                        &tail[1..]
                    )))
                }
            }
        }
    };

    if tokens.is_empty() {
        return Err(CommandError::Redirection(
            "no command before >".to_string(),
        ));
    }

    Ok(Some(Invocation {
        args: tokens,
        redirect,
    }))
}
