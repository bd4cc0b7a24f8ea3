//! Output formatting module

pub mod human;
pub mod json;
pub mod styles;

use anyhow::Result;
use console::Term;
use molecule_common::StatusRecord;
use owo_colors::OwoColorize as _;

pub use human::{HumanRenderer, ListFormat};
pub use json::JsonRenderer;
pub use styles::Styles;

/// Output context carrying styling and terminal state.
pub struct OutputContext {
    /// Stylesheet for colored output.
    pub styles: Styles,
    /// Whether to suppress non-error output.
    pub quiet: bool,
}

impl OutputContext {
    /// Create output context based on CLI flags and environment.
    #[must_use]
    pub fn new(no_color: bool, quiet: bool) -> Self {
        let is_tty = Term::stdout().is_term();
        let use_colors = !no_color && is_tty && std::env::var("NO_COLOR").is_err();

        let mut styles = Styles::default();
        if use_colors {
            styles.colorize();
        }

        Self { styles, quiet }
    }

    /// Print an info message prefixed with `ℹ` to stderr. Suppressed when `quiet`.
    ///
    /// Goes to stderr so it never mixes with table or JSON output.
    pub fn info(&self, msg: &str) {
        if !self.quiet {
            eprintln!("  {} {msg}", "ℹ".style(self.styles.info));
        }
    }
}

/// Output renderer selected by `--json`.
pub enum Renderer<'a> {
    Human(HumanRenderer<'a>),
    Json(JsonRenderer),
}

impl Renderer<'_> {
    /// Render instance status rows.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_status(&self, records: &[StatusRecord], format: ListFormat) -> Result<()> {
        match self {
            Self::Human(r) => {
                r.render_status(records, format);
                Ok(())
            }
            Self::Json(r) => r.render_status(records),
        }
    }
}
