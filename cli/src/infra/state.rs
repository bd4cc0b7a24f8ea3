//! Infrastructure implementation of the `StateStore` port.
//!
//! `ScenarioStateManager` reads the driver-written `state.yml` of one
//! scenario on a blocking task.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::application::ports::StateStore;
use crate::domain::{DriverError, ScenarioState};

/// Reader for `<ephemeral>/state.yml`.
#[derive(Debug, Clone)]
pub struct ScenarioStateManager {
    path: PathBuf,
}

impl ScenarioStateManager {
    #[must_use]
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Synchronous load - used internally by `load_async` via `spawn_blocking`.
    fn load_sync(&self) -> Result<ScenarioState, DriverError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(ScenarioState::default());
            }
            Err(e) => {
                return Err(DriverError::Unreadable {
                    path: self.path.clone(),
                    reason: e.to_string(),
                });
            }
        };
        if content.trim().is_empty() {
            return Ok(ScenarioState::default());
        }
        serde_yaml::from_str(&content).map_err(|e| DriverError::MalformedState {
            path: self.path.clone(),
            reason: e.to_string(),
        })
    }
}

impl StateStore for ScenarioStateManager {
    async fn load_async(&self) -> Result<ScenarioState> {
        let mgr = self.clone();
        let state = tokio::task::spawn_blocking(move || mgr.load_sync())
            .await
            .context("state load task panicked")??;
        tracing::debug!(path = %self.path.display(), created = state.created, converged = state.converged, "loaded scenario state");
        Ok(state)
    }
}
