//! Vagrant driver: instances are VMs reached over SSH using the connection
//! details the create step writes to `instance_config.yml`.

use anyhow::Result;
use molecule_common::StatusRecord;

use crate::application::ports::Driver;
use crate::domain::driver::{DEFAULT_SSH_CONNECTION_OPTIONS, path_string, ssh_login_template};
use crate::domain::{ConnectionOptions, DriverContext, LoginOptions, PlatformDefinition};
use crate::infra::instance_config::{find_entry, require_entry};

pub const NAME: &str = "vagrant";

/// Files the vagrant create step leaves in the ephemeral directory.
const SAFE_FILES: &[&str] = &[
    "Vagrantfile",
    "vagrant.yml",
    "instance_config.yml",
    ".vagrant",
    "vagrant-*.out",
    "vagrant-*.err",
];

#[derive(Debug, Clone)]
pub struct Vagrant {
    ctx: DriverContext,
}

impl Vagrant {
    #[must_use]
    pub fn new(ctx: DriverContext) -> Self {
        Self { ctx }
    }
}

impl Driver for Vagrant {
    fn context(&self) -> &DriverContext {
        &self.ctx
    }

    fn name(&self) -> &str {
        NAME
    }

    fn login_cmd_template(&self) -> Result<String> {
        Ok(ssh_login_template(&self.ssh_connection_options()))
    }

    fn login_options(&self, instance_name: &str) -> Result<LoginOptions> {
        Ok(require_entry(&self.instance_config(), instance_name)?.login_options())
    }

    fn ansible_connection_options(&self, instance_name: &str) -> Result<ConnectionOptions> {
        // Nothing to connect to until the instance has been created.
        Ok(find_entry(&self.instance_config(), instance_name)?
            .map(|entry| entry.ssh_connection_options(&self.ssh_connection_options()))
            .unwrap_or_default())
    }

    fn default_safe_files(&self) -> Vec<String> {
        let dir = self.ctx.scenario.ephemeral_directory();
        SAFE_FILES
            .iter()
            .map(|name| path_string(&dir.join(name)))
            .collect()
    }

    fn default_ssh_connection_options(&self) -> Vec<String> {
        DEFAULT_SSH_CONNECTION_OPTIONS
            .iter()
            .map(ToString::to_string)
            .collect()
    }

    async fn status(&self, instances: &[PlatformDefinition]) -> Result<Vec<StatusRecord>> {
        super::state_status(self, instances, None).await
    }
}
