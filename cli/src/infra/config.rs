//! Scenario discovery and loading from `<project>/molecule/*/molecule.yml`.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::domain::config::{Config, MoleculeConfig};
use crate::domain::ConfigurationError;

/// Overrides the root of every scenario's ephemeral directory.
pub const EPHEMERAL_DIRECTORY_ENV: &str = "MOLECULE_EPHEMERAL_DIRECTORY";

const MOLECULE_DIR: &str = "molecule";
const MOLECULE_FILE: &str = "molecule.yml";

/// Loads the scenarios of one project directory.
#[derive(Debug, Clone)]
pub struct ScenarioConfigLoader {
    project_dir: PathBuf,
    ephemeral_root: PathBuf,
}

impl ScenarioConfigLoader {
    /// Loader for `project_dir` with the ephemeral root taken from
    /// `MOLECULE_EPHEMERAL_DIRECTORY`, or `<tmp>/molecule` when unset.
    #[must_use]
    pub fn new(project_dir: impl Into<PathBuf>) -> Self {
        let ephemeral_root = std::env::var_os(EPHEMERAL_DIRECTORY_ENV)
            .filter(|v| !v.is_empty())
            .map_or_else(|| std::env::temp_dir().join("molecule"), PathBuf::from);
        Self::with_ephemeral_root(project_dir, ephemeral_root)
    }

    /// Loader with an explicit ephemeral root (used in tests).
    #[must_use]
    pub fn with_ephemeral_root(project_dir: impl Into<PathBuf>, ephemeral_root: impl Into<PathBuf>) -> Self {
        Self {
            project_dir: project_dir.into(),
            ephemeral_root: ephemeral_root.into(),
        }
    }

    #[must_use]
    pub fn project_dir(&self) -> &Path {
        &self.project_dir
    }

    /// Basename of the project directory, resolving `.` and friends.
    fn project_name(&self) -> String {
        let resolved = std::fs::canonicalize(&self.project_dir).unwrap_or_else(|_| self.project_dir.clone());
        resolved
            .file_name()
            .map_or_else(|| "project".to_string(), |n| n.to_string_lossy().into_owned())
    }

    /// Scenario directory names that contain a `molecule.yml`, sorted.
    ///
    /// # Errors
    ///
    /// Returns an error if the `molecule/` directory exists but cannot be
    /// listed.
    pub fn discover(&self) -> Result<Vec<String>> {
        let root = self.project_dir.join(MOLECULE_DIR);
        if !root.is_dir() {
            return Ok(Vec::new());
        }
        let mut names = Vec::new();
        for entry in std::fs::read_dir(&root).with_context(|| format!("cannot read {}", root.display()))? {
            let entry = entry.with_context(|| format!("cannot read {}", root.display()))?;
            if entry.path().join(MOLECULE_FILE).is_file() {
                names.push(entry.file_name().to_string_lossy().into_owned());
            }
        }
        names.sort();
        tracing::debug!(project = %self.project_dir.display(), scenarios = ?names, "discovered scenarios");
        Ok(names)
    }

    /// Load and validate one scenario by directory name.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::UnknownScenario`] if the scenario has no
    /// `molecule.yml`, an error if the file cannot be read or parsed, and
    /// any validation error from [`Config::assemble`].
    pub fn load(&self, scenario: &str) -> Result<Config> {
        let path = self.project_dir.join(MOLECULE_DIR).join(scenario).join(MOLECULE_FILE);
        if !path.is_file() {
            return Err(ConfigurationError::UnknownScenario(scenario.to_string()).into());
        }
        let content =
            std::fs::read_to_string(&path).with_context(|| format!("cannot read {}", path.display()))?;
        let raw: MoleculeConfig = if content.trim().is_empty() {
            MoleculeConfig::default()
        } else {
            serde_yaml::from_str(&content).with_context(|| format!("cannot parse {}", path.display()))?
        };
        let config = Config::assemble(raw, scenario, &self.ephemeral_root, &self.project_name())
            .with_context(|| format!("invalid scenario {}", path.display()))?;
        tracing::debug!(
            scenario = config.scenario.name(),
            driver = %config.driver.name,
            platforms = config.platforms.len(),
            "loaded scenario"
        );
        Ok(config)
    }

    /// Load `scenario`, or every discovered scenario when `None`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::NoScenarios`] when nothing is found, and
    /// any [`ScenarioConfigLoader::load`] error.
    pub fn load_selected(&self, scenario: Option<&str>) -> Result<Vec<Config>> {
        if let Some(name) = scenario {
            return Ok(vec![self.load(name)?]);
        }
        let names = self.discover()?;
        if names.is_empty() {
            return Err(ConfigurationError::NoScenarios(self.project_dir.clone()).into());
        }
        names.iter().map(|name| self.load(name)).collect()
    }
}
