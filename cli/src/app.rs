//! Application context - unified state passed to every command handler.
//!
//! `AppContext` bundles the output context, the rendering mode and the
//! scenario loader so command signatures stay stable as concerns are added.

use std::path::PathBuf;

use crate::domain::{ConfigurationError, DriverError, NamingCollisionError};
use crate::infra::command_runner::TokioCommandRunner;
use crate::infra::config::ScenarioConfigLoader;
use crate::output::{HumanRenderer, JsonRenderer, OutputContext, Renderer};

/// Output rendering mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-readable terminal output (default).
    Human,
    /// Machine-readable JSON output.
    Json,
}

/// Output rendering flags.
pub struct OutputFlags {
    /// Disable ANSI color output.
    pub no_color: bool,
    /// Suppress non-error output.
    pub quiet: bool,
    /// Enable JSON output mode.
    pub json: bool,
}

/// Flags passed from the top-level CLI to `AppContext::new`.
pub struct AppFlags {
    /// Output rendering options.
    pub output: OutputFlags,
    /// Project directory holding `molecule/<scenario>/molecule.yml`.
    pub project_dir: PathBuf,
}

/// Unified application context passed to every command handler.
pub struct AppContext {
    /// Terminal output context (colors, quiet mode).
    pub output: OutputContext,
    /// Output rendering mode (human vs JSON).
    pub mode: OutputMode,
    /// Scenario loader for the selected project.
    pub loader: ScenarioConfigLoader,
    /// Process runner used for interactive login.
    pub runner: TokioCommandRunner,
}

impl AppContext {
    /// Construct an `AppContext` from top-level CLI flags.
    #[must_use]
    pub fn new(flags: &AppFlags) -> Self {
        let mode = if flags.output.json {
            OutputMode::Json
        } else {
            OutputMode::Human
        };

        Self {
            output: OutputContext::new(flags.output.no_color, flags.output.quiet),
            mode,
            loader: ScenarioConfigLoader::new(&flags.project_dir),
            runner: TokioCommandRunner::new(),
        }
    }

    /// Returns the appropriate `Renderer` variant for the current output mode.
    #[must_use]
    pub fn renderer(&self) -> Renderer<'_> {
        match self.mode {
            OutputMode::Human => Renderer::Human(HumanRenderer::new(&self.output)),
            OutputMode::Json => Renderer::Json(JsonRenderer),
        }
    }
}

/// Machine-readable code for the JSON error object.
#[must_use]
pub fn error_code(err: &anyhow::Error) -> &'static str {
    if err.downcast_ref::<NamingCollisionError>().is_some() {
        "NAMING_COLLISION"
    } else if err.downcast_ref::<ConfigurationError>().is_some() {
        "CONFIGURATION_ERROR"
    } else if err.downcast_ref::<DriverError>().is_some() {
        "DRIVER_ERROR"
    } else {
        "ERROR"
    }
}
