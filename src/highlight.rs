use std::io::IsTerminal;

use inksac::prelude::*;

/// Styles the `--debug` trace lines when stderr is a color terminal.
#[derive(Debug, Clone, Copy)]
pub struct TraceHighlighter {
    color_support: ColorSupport,
}

impl Default for TraceHighlighter {
    fn default() -> Self {
        Self::new()
    }
}

impl TraceHighlighter {
    pub fn new() -> Self {
        let support = if std::io::stderr().is_terminal() {
            check_color_support().unwrap_or(ColorSupport::NoColor)
        } else {
            ColorSupport::NoColor
        };
        Self {
            color_support: support,
        }
    }

    pub fn plain() -> Self {
        Self {
            color_support: ColorSupport::NoColor,
        }
    }

    pub fn highlight_prefix(&self, prefix: &str) -> String {
        if matches!(self.color_support, ColorSupport::NoColor) {
            return prefix.to_string();
        }

        let prefix_style = Style::builder()
            .foreground(Color::RGB(128, 128, 128))
            .build();

        prefix.style(prefix_style).to_string()
    }

    pub fn highlight_cause(&self, cause: &str) -> String {
        if matches!(self.color_support, ColorSupport::NoColor) {
            return cause.to_string();
        }

        let cause_style = Style::builder().foreground(Color::Red).bold().build();

        cause.style(cause_style).to_string()
    }
}
