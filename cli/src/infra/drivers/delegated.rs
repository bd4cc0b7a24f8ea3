//! Delegated driver: the user owns instance creation.
//!
//! When `options.managed` is true (the default) the user's create playbook
//! writes `instance_config.yml` and instances are reached over SSH like
//! vagrant. When false the user supplies `ansible_connection_options` and
//! `login_cmd_template` directly and lifecycle flags are not tracked.

use anyhow::Result;
use molecule_common::{StatusFlag, StatusRecord};

use crate::application::ports::Driver;
use crate::domain::driver::{DEFAULT_SSH_CONNECTION_OPTIONS, ssh_login_template};
use crate::domain::{
    ConfigurationError, ConnectionOptions, DriverContext, LoginOptions, PlatformDefinition,
};
use crate::infra::instance_config::{find_entry, require_entry};

pub const NAME: &str = "delegated";

const MANAGED: &str = "managed";
const LOGIN_CMD_TEMPLATE: &str = "login_cmd_template";
const ANSIBLE_CONNECTION_OPTIONS: &str = "ansible_connection_options";

#[derive(Debug, Clone)]
pub struct Delegated {
    ctx: DriverContext,
    managed: bool,
    login_cmd_template: Option<String>,
    connection_options: ConnectionOptions,
}

impl Delegated {
    /// Read and validate the delegated options from `ctx`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::InvalidDriverOption`] if `managed` is not
    /// a boolean, `login_cmd_template` is not a string, or
    /// `ansible_connection_options` is not a mapping of scalars.
    pub fn new(ctx: DriverContext) -> Result<Self, ConfigurationError> {
        let managed = ctx.driver.bool_option(MANAGED)?.unwrap_or(true);
        let login_cmd_template = ctx.driver.str_option(LOGIN_CMD_TEMPLATE)?.map(str::to_string);
        let connection_options = ctx.driver.map_option(ANSIBLE_CONNECTION_OPTIONS)?;
        Ok(Self {
            ctx,
            managed,
            login_cmd_template,
            connection_options,
        })
    }

    /// `options.managed`, defaulting to true.
    #[must_use]
    pub fn managed(&self) -> bool {
        self.managed
    }
}

impl Driver for Delegated {
    fn context(&self) -> &DriverContext {
        &self.ctx
    }

    fn name(&self) -> &str {
        NAME
    }

    fn login_cmd_template(&self) -> Result<String> {
        if let Some(template) = &self.login_cmd_template {
            return Ok(template.clone());
        }
        if self.managed {
            return Ok(ssh_login_template(&self.ssh_connection_options()));
        }
        Err(ConfigurationError::InvalidDriverOption {
            key: LOGIN_CMD_TEMPLATE.to_string(),
            reason: "required when 'managed' is false".to_string(),
        }
        .into())
    }

    fn login_options(&self, instance_name: &str) -> Result<LoginOptions> {
        if self.managed {
            return Ok(require_entry(&self.instance_config(), instance_name)?.login_options());
        }
        Ok(LoginOptions::from([(
            "instance".to_string(),
            instance_name.to_string(),
        )]))
    }

    fn ansible_connection_options(&self, instance_name: &str) -> Result<ConnectionOptions> {
        if self.managed {
            return Ok(find_entry(&self.instance_config(), instance_name)?
                .map(|entry| entry.ssh_connection_options(&self.ssh_connection_options()))
                .unwrap_or_default());
        }
        Ok(self.connection_options.clone())
    }

    fn default_safe_files(&self) -> Vec<String> {
        Vec::new()
    }

    fn default_ssh_connection_options(&self) -> Vec<String> {
        if self.managed {
            DEFAULT_SSH_CONNECTION_OPTIONS
                .iter()
                .map(ToString::to_string)
                .collect()
        } else {
            Vec::new()
        }
    }

    async fn status(&self, instances: &[PlatformDefinition]) -> Result<Vec<StatusRecord>> {
        let created = (!self.managed).then_some(StatusFlag::Skipped);
        super::state_status(self, instances, created).await
    }
}
