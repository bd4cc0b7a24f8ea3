//! Driver configuration, context and the pure helpers every driver shares.
//!
//! Pure functions only - no I/O, no async, no filesystem access.

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::domain::error::{ConfigurationError, DriverError};
use crate::domain::scenario::{Provisioner, Scenario};

/// Driver used when `molecule.yml` does not name one.
pub const DEFAULT_DRIVER: &str = "docker";

/// SSH arguments injected by drivers that reach instances over SSH.
pub const DEFAULT_SSH_CONNECTION_OPTIONS: &[&str] = &[
    "-o UserKnownHostsFile=/dev/null",
    "-o ControlMaster=auto",
    "-o ControlPersist=60s",
    "-o IdentitiesOnly=yes",
    "-o StrictHostKeyChecking=no",
];

/// Substitution variables for a login command template.
pub type LoginOptions = BTreeMap<String, String>;

/// Host variables a provisioner injects to route its connection.
pub type ConnectionOptions = BTreeMap<String, String>;

/// Driver-specific options, passed through untouched.
pub type DriverOptions = BTreeMap<String, serde_yaml::Value>;

/// The `driver:` section of `molecule.yml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DriverConfig {
    pub name: String,
    pub options: DriverOptions,
    /// User-declared paths exempt from cleanup.
    pub safe_files: Vec<String>,
    /// User-declared SSH arguments.
    pub ssh_connection_options: Vec<String>,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_DRIVER.to_string(),
            options: DriverOptions::new(),
            safe_files: Vec::new(),
            ssh_connection_options: Vec::new(),
        }
    }
}

impl DriverConfig {
    /// Read a boolean option.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::InvalidDriverOption`] if the key is set
    /// to something other than a boolean.
    pub fn bool_option(&self, key: &str) -> Result<Option<bool>, ConfigurationError> {
        match self.options.get(key) {
            None | Some(serde_yaml::Value::Null) => Ok(None),
            Some(serde_yaml::Value::Bool(b)) => Ok(Some(*b)),
            Some(_) => Err(invalid_option(key, "expected a boolean")),
        }
    }

    /// Read a string option.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::InvalidDriverOption`] if the key is set
    /// to something other than a string.
    pub fn str_option(&self, key: &str) -> Result<Option<&str>, ConfigurationError> {
        match self.options.get(key) {
            None | Some(serde_yaml::Value::Null) => Ok(None),
            Some(serde_yaml::Value::String(s)) => Ok(Some(s.as_str())),
            Some(_) => Err(invalid_option(key, "expected a string")),
        }
    }

    /// Read a mapping option whose values are scalars.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::InvalidDriverOption`] if the key is not
    /// a mapping or holds a nested value.
    pub fn map_option(&self, key: &str) -> Result<BTreeMap<String, String>, ConfigurationError> {
        let mapping = match self.options.get(key) {
            None | Some(serde_yaml::Value::Null) => return Ok(BTreeMap::new()),
            Some(serde_yaml::Value::Mapping(m)) => m,
            Some(_) => return Err(invalid_option(key, "expected a mapping")),
        };
        mapping
            .iter()
            .map(|(k, v)| match (scalar_to_string(k), scalar_to_string(v)) {
                (Some(k), Some(v)) => Ok((k, v)),
                _ => Err(invalid_option(key, "keys and values must be scalars")),
            })
            .collect()
    }
}

fn invalid_option(key: &str, reason: &str) -> ConfigurationError {
    ConfigurationError::InvalidDriverOption {
        key: key.to_string(),
        reason: reason.to_string(),
    }
}

/// Everything a driver reads from the loaded configuration.
///
/// Passed by value into each driver's constructor; drivers never reach
/// back into a shared global config.
#[derive(Debug, Clone, PartialEq)]
pub struct DriverContext {
    pub driver: DriverConfig,
    pub scenario: Scenario,
    pub provisioner: Provisioner,
}

/// Defaults first, then every extra entry not already present.
#[must_use]
pub fn merge_unique(defaults: &[String], extra: &[String]) -> Vec<String> {
    let mut out = defaults.to_vec();
    for item in extra {
        if !out.contains(item) {
            out.push(item.clone());
        }
    }
    out
}

/// Render a scalar YAML value as a plain string.
#[must_use]
pub fn scalar_to_string(value: &serde_yaml::Value) -> Option<String> {
    match value {
        serde_yaml::Value::String(s) => Some(s.clone()),
        serde_yaml::Value::Number(n) => Some(n.to_string()),
        serde_yaml::Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// `path` as a string, the way it is handed to external tools.
#[must_use]
pub fn path_string(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

// ── Login templates ───────────────────────────────────────────────────────────

/// A `{key}` placeholder, or a doubled brace standing for a literal one.
#[allow(clippy::expect_used)] // literal pattern
static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{|\}\}|\{([A-Za-z_][A-Za-z0-9_]*)\}").expect("valid placeholder regex")
});

/// Login template for drivers that reach instances over SSH.
#[must_use]
pub fn ssh_login_template(ssh_connection_options: &[String]) -> String {
    let base = "ssh {address} -l {user} -p {port} -i {identity_file}";
    if ssh_connection_options.is_empty() {
        base.to_string()
    } else {
        format!("{base} {}", ssh_connection_options.join(" "))
    }
}

/// Substitute every `{key}` in `template` from `options`.
///
/// `{{` and `}}` render as literal braces.
///
/// # Errors
///
/// Returns [`DriverError::UnboundTemplateKey`] for a placeholder with no value.
pub fn render_template(template: &str, options: &LoginOptions) -> Result<String, DriverError> {
    let mut out = String::with_capacity(template.len());
    let mut last = 0;
    for caps in PLACEHOLDER.captures_iter(template) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        out.push_str(&template[last..whole.start()]);
        last = whole.end();
        let Some(key) = caps.get(1) else {
            out.push_str(&whole.as_str()[..1]);
            continue;
        };
        let value = options
            .get(key.as_str())
            .ok_or_else(|| DriverError::UnboundTemplateKey {
                key: key.as_str().to_string(),
            })?;
        out.push_str(value);
    }
    out.push_str(&template[last..]);
    Ok(out)
}

/// Split a rendered login command into argv with shell quoting rules.
///
/// # Errors
///
/// Returns [`DriverError::MalformedLoginCommand`] when a quote is left open.
pub fn split_command(command: &str) -> Result<Vec<String>, DriverError> {
    shlex::split(command).ok_or_else(|| DriverError::MalformedLoginCommand {
        command: command.to_string(),
    })
}
