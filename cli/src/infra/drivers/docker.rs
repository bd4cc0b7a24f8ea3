//! Docker driver: instances are containers reached with `docker exec`.

use anyhow::Result;
use molecule_common::StatusRecord;

use crate::application::ports::Driver;
use crate::domain::{ConnectionOptions, DriverContext, LoginOptions, PlatformDefinition};

pub const NAME: &str = "docker";

const LOGIN_CMD_TEMPLATE: &str = "docker exec -ti {instance} bash";

#[derive(Debug, Clone)]
pub struct Docker {
    ctx: DriverContext,
}

impl Docker {
    #[must_use]
    pub fn new(ctx: DriverContext) -> Self {
        Self { ctx }
    }
}

impl Driver for Docker {
    fn context(&self) -> &DriverContext {
        &self.ctx
    }

    fn name(&self) -> &str {
        NAME
    }

    fn login_cmd_template(&self) -> Result<String> {
        Ok(LOGIN_CMD_TEMPLATE.to_string())
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
            "docker".to_string(),
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
