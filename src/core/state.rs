use std::fmt;
use std::sync::Arc;

use crate::error::print_error;
use crate::highlight::TraceHighlighter;
use crate::path::PathRegistry;
use crate::process::ForegroundChild;

/// Everything the interpreter mutates while running, passed by reference
/// through the loop, the dispatcher and the launcher.
pub struct ShellState {
    pub paths: PathRegistry,
    foreground: Arc<ForegroundChild>,
    debug: bool,
    highlighter: TraceHighlighter,
}

impl ShellState {
    pub fn new(debug: bool) -> Self {
        Self {
            paths: PathRegistry::new(),
            foreground: Arc::new(ForegroundChild::new()),
            debug,
            highlighter: TraceHighlighter::new(),
        }
    }

    /// Handle shared with the signal forwarder.
    pub fn foreground(&self) -> &Arc<ForegroundChild> {
        &self.foreground
    }

    pub fn is_debug(&self) -> bool {
        self.debug
    }

    pub fn trace(&self, message: fmt::Arguments<'_>) {
        if self.debug {
            eprintln!("{} {}", self.highlighter.highlight_prefix("cmpsh: debug:"), message);
        }
    }

    /// Reports a recoverable failure: the generic diagnostic, plus the cause
    /// when tracing.
    pub fn fail(&self, cause: &dyn fmt::Display) {
        if self.debug {
            let cause = self.highlighter.highlight_cause(&cause.to_string());
            self.trace(format_args!("{}", cause));
        }
        print_error();
    }
}
