//! Driver-written connection metadata (`instance_config.yml`).
//!
//! Drivers that reach instances over SSH record one entry per created
//! instance. Pure data and lookups - reading the file lives in
//! `crate::infra::instance_config`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::driver::{ConnectionOptions, LoginOptions, scalar_to_string};

/// One instance's connection details.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstanceConfigEntry {
    pub instance: String,
    pub address: String,
    pub user: String,
    /// Integer in most files, occasionally a quoted string.
    pub port: serde_yaml::Value,
    pub identity_file: String,
    /// Anything else the driver recorded.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_yaml::Value>,
}

impl InstanceConfigEntry {
    #[must_use]
    pub fn port_string(&self) -> String {
        scalar_to_string(&self.port).unwrap_or_default()
    }

    /// Template variables for this entry; `instance` is always present.
    #[must_use]
    pub fn login_options(&self) -> LoginOptions {
        let mut opts: LoginOptions = self
            .extra
            .iter()
            .filter_map(|(k, v)| scalar_to_string(v).map(|v| (k.clone(), v)))
            .collect();
        opts.insert("instance".to_string(), self.instance.clone());
        opts.insert("address".to_string(), self.address.clone());
        opts.insert("user".to_string(), self.user.clone());
        opts.insert("port".to_string(), self.port_string());
        opts.insert("identity_file".to_string(), self.identity_file.clone());
        opts
    }

    /// Host variables routing an ansible SSH connection to this entry.
    #[must_use]
    pub fn ssh_connection_options(&self, ssh_connection_options: &[String]) -> ConnectionOptions {
        ConnectionOptions::from([
            ("ansible_user".to_string(), self.user.clone()),
            ("ansible_host".to_string(), self.address.clone()),
            ("ansible_port".to_string(), self.port_string()),
            (
                "ansible_private_key_file".to_string(),
                self.identity_file.clone(),
            ),
            ("connection".to_string(), "ssh".to_string()),
            (
                "ansible_ssh_common_args".to_string(),
                ssh_connection_options.join(" "),
            ),
        ])
    }
}

/// Find the entry recorded for `instance_name`.
#[must_use]
pub fn find_instance<'a>(
    entries: &'a [InstanceConfigEntry],
    instance_name: &str,
) -> Option<&'a InstanceConfigEntry> {
    entries.iter().find(|e| e.instance == instance_name)
}
