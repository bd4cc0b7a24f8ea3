//! Output styles using owo-colors stylesheet pattern

use molecule_common::StatusFlag;
use owo_colors::Style;

/// Centralized stylesheet for CLI output colors.
#[derive(Default, Clone)]
pub struct Styles {
    /// Success messages and `True` flags (green)
    pub success: Style,
    /// Warnings and `Skipped` flags (yellow)
    pub warning: Style,
    /// Info messages (blue)
    pub info: Style,
    /// Dimmed/secondary text, `False` flags
    pub dim: Style,
    /// Instance names
    pub bold: Style,
    /// Table headers
    pub header: Style,
}

impl Styles {
    /// Apply colors to the stylesheet.
    pub fn colorize(&mut self) {
        self.success = Style::new().green();
        self.warning = Style::new().yellow();
        self.info = Style::new().blue();
        self.dim = Style::new().dimmed();
        self.bold = Style::new().bold();
        self.header = Style::new().bold().cyan();
    }

    /// Style for a status flag cell.
    #[must_use]
    pub fn flag(&self, flag: StatusFlag) -> Style {
        match flag {
            StatusFlag::True => self.success,
            StatusFlag::False => self.dim,
            StatusFlag::Skipped => self.warning,
        }
    }
}
