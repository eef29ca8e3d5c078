//! Output handle used by commands.
//!
//! Data (reports, tables, JSON) always goes to stdout. Decorative lines are
//! dropped in quiet mode; errors go to stderr.

use super::theme::Theme;
use crossterm::style::Stylize;

/// A handle for printing command output in the house style.
#[derive(Debug, Clone, Default)]
pub struct Output {
    theme: Theme,
    quiet: bool,
}

impl Output {
    /// Create an output handle.
    pub fn new(quiet: bool) -> Self {
        Self {
            theme: Theme::default(),
            quiet,
        }
    }

    /// The theme in use.
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Print a line of data. Never suppressed.
    pub fn data(&self, text: impl std::fmt::Display) {
        println!("{text}");
    }

    /// Print a dimmed section header.
    pub fn section(&self, title: &str) {
        if self.quiet {
            return;
        }
        println!();
        println!("  {}", title.with(self.theme.colors.header).bold());
    }

    /// Print an informational message.
    pub fn info(&self, msg: &str) {
        if self.quiet {
            return;
        }
        println!("  {} {msg}", self.theme.icons.info.blue());
    }

    /// Print a warning to stderr.
    pub fn warning(&self, msg: &str) {
        eprintln!(
            "  {} {msg}",
            self.theme.icons.warning.with(self.theme.colors.warning)
        );
    }
}
