//! Role-based text emphasis for terminal output.

use owo_colors::OwoColorize;

/// What a fragment of report text means, independent of how it is styled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Success,
    Danger,
    Warning,
    Accent,
    Info,
}

pub trait Highlighter {
    fn emphasize(&self, text: &str, role: Role) -> String;
}

/// ANSI escape styling.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnsiHighlighter;

impl Highlighter for AnsiHighlighter {
    fn emphasize(&self, text: &str, role: Role) -> String {
        match role {
            Role::Success => text.green().to_string(),
            Role::Danger => text.red().to_string(),
            Role::Warning => text.yellow().to_string(),
            Role::Accent => text.bright_green().bold().to_string(),
            Role::Info => text.blue().to_string(),
        }
    }
}

/// Leaves text untouched; used when colors are disabled.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainHighlighter;

impl Highlighter for PlainHighlighter {
    fn emphasize(&self, text: &str, _role: Role) -> String {
        text.to_owned()
    }
}
