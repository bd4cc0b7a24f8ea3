//! Scenario configuration schema and the validated `Config` built from it.
//!
//! Pure functions only - no I/O, no async, no filesystem access.

use std::path::Path;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::domain::driver::{DriverConfig, DriverContext};
use crate::domain::platform::{Platforms, RawPlatform};
use crate::domain::scenario::{DEFAULT_PROVISIONER, Provisioner, Scenario, ephemeral_directory};

// ── Config schema ────────────────────────────────────────────────────────────

/// Top-level contents of `molecule/<scenario>/molecule.yml`.
///
/// Unknown sections (`dependency`, `verifier`, `lint`, ...) are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MoleculeConfig {
    pub driver: DriverConfig,
    pub platforms: Vec<RawPlatform>,
    pub provisioner: ProvisionerSection,
    pub scenario: ScenarioSection,
}

/// The `provisioner:` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProvisionerSection {
    #[serde(default = "default_provisioner_name")]
    pub name: String,
}

impl Default for ProvisionerSection {
    fn default() -> Self {
        Self {
            name: default_provisioner_name(),
        }
    }
}

fn default_provisioner_name() -> String {
    DEFAULT_PROVISIONER.to_string()
}

/// The `scenario:` section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioSection {
    /// Overrides the scenario directory name when set.
    pub name: Option<String>,
}

// ── Validated config ─────────────────────────────────────────────────────────

/// One loaded scenario: every collaborator the drivers and the status
/// aggregator read, validated eagerly.
#[derive(Debug, Clone)]
pub struct Config {
    pub scenario: Scenario,
    pub provisioner: Provisioner,
    pub driver: DriverConfig,
    pub platforms: Platforms,
}

impl Config {
    /// Validate `raw` and derive paths.
    ///
    /// `directory_name` names the scenario when the file does not;
    /// the ephemeral directory is `<ephemeral_root>/<project>/<scenario>`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError` for malformed declarations and
    /// `NamingCollisionError` for duplicate instance names.
    pub fn assemble(
        raw: MoleculeConfig,
        directory_name: &str,
        ephemeral_root: &Path,
        project: &str,
    ) -> Result<Self> {
        let scenario_name = raw
            .scenario
            .name
            .as_deref()
            .unwrap_or(directory_name)
            .trim()
            .to_string();
        let scenario = Scenario::new(
            &scenario_name,
            ephemeral_directory(ephemeral_root, project, &scenario_name),
        )?;
        let platforms = Platforms::from_raw(&raw.platforms, scenario.name())?;
        let provisioner = Provisioner::for_scenario(&raw.provisioner.name, &scenario);

        Ok(Self {
            scenario,
            provisioner,
            driver: raw.driver,
            platforms,
        })
    }

    /// The context handed to the driver constructor.
    #[must_use]
    pub fn driver_context(&self) -> DriverContext {
        DriverContext {
            driver: self.driver.clone(),
            scenario: self.scenario.clone(),
            provisioner: self.provisioner.clone(),
        }
    }
}

// ── Unit tests ───────────────────────────────────────────────────────────────
