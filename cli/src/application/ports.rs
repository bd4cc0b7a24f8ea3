//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain` - never from `crate::infra`,
//! `crate::commands`, or `crate::output`.

use std::collections::BTreeMap;
use std::path::PathBuf;

use anyhow::Result;
use molecule_common::StatusRecord;

use crate::domain::driver::{
    ConnectionOptions, DriverContext, DriverOptions, LoginOptions, merge_unique, path_string,
};
use crate::domain::{PlatformDefinition, ScenarioState};

// ── Driver Port ───────────────────────────────────────────────────────────────

/// The capability contract every infrastructure backend implements.
///
/// Everything except [`Driver::status`] is a pure function of the driver
/// and the metadata it was constructed with. `status` is the one place a
/// driver may touch backend state.
#[allow(async_fn_in_trait)]
pub trait Driver {
    /// Configuration, scenario and provisioner this driver was built from.
    fn context(&self) -> &DriverContext;

    /// Stable identifier, e.g. `"docker"`.
    fn name(&self) -> &str;

    /// Declared driver options, untouched.
    fn options(&self) -> &DriverOptions {
        &self.context().driver.options
    }

    /// Template used to attach an interactive shell to an instance.
    ///
    /// # Errors
    ///
    /// Returns an error if the driver cannot log in with its current options.
    fn login_cmd_template(&self) -> Result<String>;

    /// Variables substituted into [`Driver::login_cmd_template`].
    ///
    /// The result always binds `instance` to `instance_name`.
    ///
    /// # Errors
    ///
    /// Returns a `DriverError` when connection details depend on backend
    /// metadata that is missing or malformed.
    fn login_options(&self, instance_name: &str) -> Result<LoginOptions>;

    /// Host variables a provisioner injects to reach `instance_name`.
    ///
    /// # Errors
    ///
    /// Returns a `DriverError` when backend metadata is malformed.
    fn ansible_connection_options(&self, instance_name: &str) -> Result<ConnectionOptions>;

    /// Options for the external verifier: a `connection` discriminator plus
    /// the inventory it should read.
    fn testinfra_options(&self) -> BTreeMap<String, String> {
        BTreeMap::from([
            ("connection".to_string(), "ansible".to_string()),
            (
                "ansible-inventory".to_string(),
                path_string(self.context().provisioner.inventory_file()),
            ),
        ])
    }

    /// Paths this driver always preserves.
    fn default_safe_files(&self) -> Vec<String>;

    /// Effective safe files: driver defaults, then user-declared extras.
    fn safe_files(&self) -> Vec<String> {
        merge_unique(&self.default_safe_files(), &self.context().driver.safe_files)
    }

    /// SSH arguments this driver always injects.
    fn default_ssh_connection_options(&self) -> Vec<String>;

    /// Effective SSH arguments: driver defaults, then user-declared extras.
    fn ssh_connection_options(&self) -> Vec<String> {
        merge_unique(
            &self.default_ssh_connection_options(),
            &self.context().driver.ssh_connection_options,
        )
    }

    /// `<scenario ephemeral directory>/instance_config.yml`
    fn instance_config(&self) -> PathBuf {
        self.context().scenario.instance_config()
    }

    /// One status record per instance, in the order given.
    ///
    /// # Errors
    ///
    /// Returns a `DriverError` if backend state cannot be read. No partial
    /// result is ever returned.
    async fn status(&self, instances: &[PlatformDefinition]) -> Result<Vec<StatusRecord>>;
}

// ── State Port ────────────────────────────────────────────────────────────────

/// Read access to the driver-written scenario state (`state.yml`).
#[allow(async_fn_in_trait)]
pub trait StateStore {
    /// Load the scenario state; a scenario with no state file yields the
    /// default (nothing created).
    async fn load_async(&self) -> Result<ScenarioState>;
}

// ── Command Runner Port ───────────────────────────────────────────────────────

/// Abstracts process execution so infrastructure can be swapped or mocked.
#[allow(async_fn_in_trait)]
pub trait CommandRunner {
    /// Run a program with inherited stdio and return its exit status.
    async fn run_status(&self, program: &str, args: &[&str]) -> Result<std::process::ExitStatus>;
}
