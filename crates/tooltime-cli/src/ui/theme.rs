//! UI Theme - Design system constants
//!
//! Colors and icons used by every command, kept in one place so listings
//! and messages look the same everywhere.

use crossterm::style::Color;

/// Default theme for tooltime output
#[derive(Debug, Clone, Default)]
pub struct Theme {
    /// Colors for different UI elements
    pub colors: ColorScheme,
    /// Status icons
    pub icons: Icons,
}

/// Color scheme for UI elements
#[derive(Debug, Clone)]
pub struct ColorScheme {
    /// Headers and labels
    pub header: Color,
    /// Warning states
    pub warning: Color,
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self {
            header: Color::DarkGrey,
            warning: Color::Yellow,
        }
    }
}

/// Status icons
#[derive(Debug, Clone)]
pub struct Icons {
    /// Billed day / success (✓)
    pub success: &'static str,
    /// Not billed / failure (✗)
    pub error: &'static str,
    /// Warning (⚠)
    pub warning: &'static str,
    /// Info (ℹ)
    pub info: &'static str,
}

impl Default for Icons {
    fn default() -> Self {
        Self {
            success: "✓",
            error: "✗",
            warning: "⚠",
            info: "ℹ",
        }
    }
}

impl Icons {
    /// Icon for a yes/no billing flag.
    pub fn flag(&self, billed: bool) -> &'static str {
        if billed { self.success } else { self.error }
    }
}
