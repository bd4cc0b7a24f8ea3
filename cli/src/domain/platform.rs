//! Platform catalog - declared platforms and their scenario-qualified instances.
//!
//! Pure functions only - no I/O, no async, no filesystem access.

use std::collections::{BTreeMap, HashMap};

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::domain::error::{ConfigurationError, NamingCollisionError};

/// A platform entry exactly as it appears in `molecule.yml`.
///
/// `name` is optional here so a missing name surfaces as a
/// [`ConfigurationError`] instead of a generic deserialisation failure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawPlatform {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub groups: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub append_scenario: Option<bool>,
    /// Driver-specific keys (`image`, `box`, ...), kept verbatim.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_yaml::Value>,
}

/// A validated platform definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlatformDefinition {
    pub name: String,
    #[serde(default)]
    pub groups: Vec<String>,
    #[serde(default)]
    pub children: Vec<String>,
    #[serde(default = "default_append_scenario")]
    pub append_scenario: bool,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_yaml::Value>,
}

fn default_append_scenario() -> bool {
    true
}

impl PlatformDefinition {
    /// Definition with only a name and default flags.
    #[must_use]
    pub fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
            groups: Vec::new(),
            children: Vec::new(),
            append_scenario: true,
            extra: BTreeMap::new(),
        }
    }

    /// Validate a raw entry at position `index`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::MissingPlatformName`] when the entry has
    /// no name or a blank one.
    pub fn from_raw(index: usize, raw: &RawPlatform) -> Result<Self, ConfigurationError> {
        let name = raw
            .name
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .ok_or(ConfigurationError::MissingPlatformName { index })?;
        Ok(Self {
            name: name.to_string(),
            groups: raw.groups.clone(),
            children: raw.children.clone(),
            append_scenario: raw.append_scenario.unwrap_or(true),
            extra: raw.extra.clone(),
        })
    }

    /// This definition's instance name within `scenario_name`.
    #[must_use]
    pub fn qualified_name(&self, scenario_name: &str) -> String {
        if self.append_scenario {
            qualify(&self.name, scenario_name)
        } else {
            self.name.clone()
        }
    }
}

/// Compose an instance name with its scenario name.
#[must_use]
pub fn qualify(name: &str, scenario_name: &str) -> String {
    format!("{name}-{scenario_name}")
}

/// The declared platforms of one scenario.
///
/// Construction validates every entry and rejects qualified-name collisions,
/// so any `Platforms` value is safe to hand to a driver.
#[derive(Debug, Clone, PartialEq)]
pub struct Platforms {
    definitions: Vec<PlatformDefinition>,
    scenario_name: String,
}

impl Platforms {
    /// Build the catalog from raw config entries.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError`] for empty lists or nameless entries and
    /// [`NamingCollisionError`] when two entries qualify to the same name.
    pub fn from_raw(raw: &[RawPlatform], scenario_name: &str) -> Result<Self> {
        let definitions = raw
            .iter()
            .enumerate()
            .map(|(index, entry)| PlatformDefinition::from_raw(index, entry))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(definitions, scenario_name)
    }

    /// Build the catalog from already-validated definitions.
    ///
    /// # Errors
    ///
    /// Same as [`Platforms::from_raw`].
    pub fn new(definitions: Vec<PlatformDefinition>, scenario_name: &str) -> Result<Self> {
        if scenario_name.trim().is_empty() {
            return Err(ConfigurationError::EmptyScenarioName.into());
        }
        if definitions.is_empty() {
            return Err(ConfigurationError::NoPlatforms.into());
        }
        if let Some((index, _)) = definitions
            .iter()
            .enumerate()
            .find(|(_, d)| d.name.trim().is_empty())
        {
            return Err(ConfigurationError::MissingPlatformName { index }.into());
        }
        check_unique(&definitions, scenario_name)?;
        Ok(Self {
            definitions,
            scenario_name: scenario_name.to_string(),
        })
    }

    /// The declared definitions, in declaration order, unmodified.
    #[must_use]
    pub fn instances(&self) -> &[PlatformDefinition] {
        &self.definitions
    }

    /// An owned copy of [`Platforms::instances`] with scenario-qualified names.
    ///
    /// Recomputed on every call; the catalog itself is never touched.
    #[must_use]
    pub fn instances_with_scenario_name(&self) -> Vec<PlatformDefinition> {
        self.definitions
            .iter()
            .map(|d| PlatformDefinition {
                name: d.qualified_name(&self.scenario_name),
                ..d.clone()
            })
            .collect()
    }

    /// Qualified instance names, in declaration order.
    #[must_use]
    pub fn instance_names(&self) -> Vec<String> {
        self.definitions
            .iter()
            .map(|d| d.qualified_name(&self.scenario_name))
            .collect()
    }

    /// Ordered union of every group referenced by a platform.
    #[must_use]
    pub fn groups(&self) -> Vec<String> {
        let mut out: Vec<String> = Vec::new();
        for group in self.definitions.iter().flat_map(|d| &d.groups) {
            if !out.contains(group) {
                out.push(group.clone());
            }
        }
        out
    }

    #[must_use]
    pub fn scenario_name(&self) -> &str {
        &self.scenario_name
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

fn check_unique(
    definitions: &[PlatformDefinition],
    scenario_name: &str,
) -> Result<(), NamingCollisionError> {
    let mut seen: HashMap<String, usize> = HashMap::with_capacity(definitions.len());
    for (index, definition) in definitions.iter().enumerate() {
        let name = definition.qualified_name(scenario_name);
        if let Some(&first) = seen.get(&name) {
            return Err(NamingCollisionError {
                name,
                scenario: scenario_name.to_string(),
                first,
                second: index,
            });
        }
        seen.insert(name, index);
    }
    Ok(())
}
