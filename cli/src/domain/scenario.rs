//! Scenario and provisioner collaborators.
//!
//! Both are read-only views handed to drivers: the scenario supplies its
//! name and ephemeral directory, the provisioner its inventory file. Path
//! derivation lives here so no driver hard-codes a location.

use std::path::{Path, PathBuf};

use crate::domain::error::ConfigurationError;

/// Scenario used when `molecule.yml` does not name one.
pub const DEFAULT_SCENARIO: &str = "default";

/// Provisioner used when `molecule.yml` does not name one.
pub const DEFAULT_PROVISIONER: &str = "ansible";

/// File name of the driver-written connection metadata.
pub const INSTANCE_CONFIG_FILE: &str = "instance_config.yml";

/// File name of the scenario lifecycle state.
pub const STATE_FILE: &str = "state.yml";

/// A named test run context with its own scratch directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scenario {
    name: String,
    ephemeral_directory: PathBuf,
}

impl Scenario {
    /// # Errors
    ///
    /// Returns [`ConfigurationError::EmptyScenarioName`] for a blank name.
    pub fn new(
        name: &str,
        ephemeral_directory: impl Into<PathBuf>,
    ) -> Result<Self, ConfigurationError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ConfigurationError::EmptyScenarioName);
        }
        Ok(Self {
            name: name.to_string(),
            ephemeral_directory: ephemeral_directory.into(),
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn ephemeral_directory(&self) -> &Path {
        &self.ephemeral_directory
    }

    /// `<ephemeral>/instance_config.yml`
    #[must_use]
    pub fn instance_config(&self) -> PathBuf {
        self.ephemeral_directory.join(INSTANCE_CONFIG_FILE)
    }

    /// `<ephemeral>/state.yml`
    #[must_use]
    pub fn state_file(&self) -> PathBuf {
        self.ephemeral_directory.join(STATE_FILE)
    }

    /// `<ephemeral>/inventory`
    #[must_use]
    pub fn inventory_directory(&self) -> PathBuf {
        self.ephemeral_directory.join("inventory")
    }
}

/// Default scratch directory: `<root>/<project>/<scenario>`.
///
/// `root` is normally `<tmp>/molecule`; `project` is the basename of the
/// project directory so two checkouts of different roles never share state.
#[must_use]
pub fn ephemeral_directory(root: &Path, project: &str, scenario_name: &str) -> PathBuf {
    root.join(project).join(scenario_name)
}

/// The provisioner as drivers see it: a name and an inventory path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Provisioner {
    name: String,
    inventory_file: PathBuf,
}

impl Provisioner {
    /// Provisioner whose inventory lives in `scenario`'s inventory directory.
    #[must_use]
    pub fn for_scenario(name: &str, scenario: &Scenario) -> Self {
        Self {
            name: name.to_string(),
            inventory_file: scenario
                .inventory_directory()
                .join("ansible_inventory.yml"),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn inventory_file(&self) -> &Path {
        &self.inventory_file
    }
}
