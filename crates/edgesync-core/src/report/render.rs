use std::fmt;

use super::Report;
use crate::highlight::{AnsiHighlighter, Highlighter, PlainHighlighter, Role};

/// Bytes per binary megabyte.
pub const ONE_MB: u64 = 1 << 20;

const ARROW: &str = "\u{2192}";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub colors: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { colors: true }
    }
}

impl RenderOptions {
    pub fn plain() -> Self {
        Self { colors: false }
    }
}

/// Milliseconds as seconds, without rounding (`1500` -> `1.5`).
pub fn format_seconds(millis: u64) -> String {
    format!("{}", millis as f64 / 1000.0)
}

/// Bytes as binary megabytes with two decimals.
pub fn format_megabytes(bytes: u64) -> String {
    format!("{:.2}", bytes as f64 / ONE_MB as f64)
}

impl Report {
    pub fn render(&self, options: RenderOptions) -> String {
        if options.colors {
            self.render_with(&AnsiHighlighter)
        } else {
            self.render_with(&PlainHighlighter)
        }
    }

    pub fn render_with(&self, highlighter: &dyn Highlighter) -> String {
        let mut out = format!(
            "{} {} {}",
            self.source,
            highlighter.emphasize(ARROW, Role::Accent),
            self.target
        );

        if self.is_up_to_date() {
            out.push_str("\nUP TO DATE");
            return out;
        }

        out.push_str(&format!("\nTook: {} s", format_seconds(self.time)));

        match self.amount {
            Some(bytes) => {
                out.push_str(&format!("\nTransferred ({} MB):\n\t", format_megabytes(bytes)))
            }
            None => out.push_str("\nTransfer:\n\t"),
        }
        let lines: Vec<String> = self
            .diffs
            .iter()
            .map(|diff| highlighter.emphasize(&diff.line(), diff.kind.role()))
            .collect();
        out.push_str(&lines.join("\n\t"));
        out.push('\n');

        let paths = self.invalidation_paths();
        if self.invalidated && !paths.is_empty() {
            let domains: Vec<String> = self
                .invalidation_domains()
                .into_iter()
                .map(|name| highlighter.emphasize(name, Role::Info))
                .collect();
            let paths: Vec<String> = paths
                .iter()
                .map(|path| highlighter.emphasize(path, Role::Danger))
                .collect();
            out.push_str(&format!(
                "Invalidated on ({}):\n\t{}",
                domains.join(", "),
                paths.join("\n\t")
            ));
        }

        out
    }
}

/// Plain-text rendering.
impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(RenderOptions::plain()))
    }
}
