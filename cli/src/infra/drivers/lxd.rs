//! LXD driver: instances are system containers reached with `lxc exec`.

use anyhow::Result;
use molecule_common::StatusRecord;

use crate::application::ports::Driver;
use crate::domain::{ConnectionOptions, DriverContext, LoginOptions, PlatformDefinition};

pub const NAME: &str = "lxd";

#[derive(Debug, Clone)]
pub struct Lxd {
    ctx: DriverContext,
}

impl Lxd {
    #[must_use]
    pub fn new(ctx: DriverContext) -> Self {
        Self { ctx }
    }
}

impl Driver for Lxd {
    fn context(&self) -> &DriverContext {
        &self.ctx
    }

    fn name(&self) -> &str {
        NAME
    }

    fn login_cmd_template(&self) -> Result<String> {
        Ok("lxc exec {instance} bash".to_string())
    }

    fn login_options(&self, instance_name: &str) -> Result<LoginOptions> {
        Ok(LoginOptions::from([(
            "instance".to_string(),
            instance_name.to_string(),
        )]))
    }

    fn ansible_connection_options(&self, _instance_name: &str) -> Result<ConnectionOptions> {
        Ok(ConnectionOptions::from([(
            "ansible_connection".to_string(),
            "lxd".to_string(),
        )]))
    }

    fn default_safe_files(&self) -> Vec<String> {
        Vec::new()
    }

    fn default_ssh_connection_options(&self) -> Vec<String> {
        Vec::new()
    }

    async fn status(&self, instances: &[PlatformDefinition]) -> Result<Vec<StatusRecord>> {
        super::state_status(self, instances, None).await
    }
}
