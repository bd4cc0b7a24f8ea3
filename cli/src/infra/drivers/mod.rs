//! Concrete drivers and the name → constructor registry.
//!
//! The set of drivers is closed: [`AnyDriver`] holds one of them and
//! forwards every [`Driver`] call to it.

pub mod delegated;
pub mod docker;
pub mod lxd;
pub mod vagrant;

use std::collections::BTreeMap;
use std::path::PathBuf;

use anyhow::Result;
use molecule_common::{StatusFlag, StatusRecord, capitalize};

use crate::application::ports::{Driver, StateStore};
use crate::domain::{
    ConfigurationError, ConnectionOptions, DriverContext, DriverOptions, LoginOptions,
    PlatformDefinition,
};
use crate::infra::state::ScenarioStateManager;

pub use delegated::Delegated;
pub use docker::Docker;
pub use lxd::Lxd;
pub use vagrant::Vagrant;

// ── Registry ─────────────────────────────────────────────────────────────────

type Constructor = fn(DriverContext) -> Result<AnyDriver, ConfigurationError>;

fn build_delegated(ctx: DriverContext) -> Result<AnyDriver, ConfigurationError> {
    Ok(AnyDriver::Delegated(Delegated::new(ctx)?))
}

fn build_docker(ctx: DriverContext) -> Result<AnyDriver, ConfigurationError> {
    Ok(AnyDriver::Docker(Docker::new(ctx)))
}

fn build_lxd(ctx: DriverContext) -> Result<AnyDriver, ConfigurationError> {
    Ok(AnyDriver::Lxd(Lxd::new(ctx)))
}

fn build_vagrant(ctx: DriverContext) -> Result<AnyDriver, ConfigurationError> {
    Ok(AnyDriver::Vagrant(Vagrant::new(ctx)))
}

/// Every known driver, sorted by name.
const REGISTRY: &[(&str, Constructor)] = &[
    (delegated::NAME, build_delegated),
    (docker::NAME, build_docker),
    (lxd::NAME, build_lxd),
    (vagrant::NAME, build_vagrant),
];

/// Names accepted in `driver.name`.
#[must_use]
pub fn driver_names() -> Vec<&'static str> {
    REGISTRY.iter().map(|(name, _)| *name).collect()
}

/// Build the driver `ctx.driver.name` selects.
///
/// # Errors
///
/// Returns [`ConfigurationError::UnknownDriver`] for a name not in the
/// registry, or [`ConfigurationError::InvalidDriverOption`] when the
/// selected driver rejects its options.
pub fn from_context(ctx: DriverContext) -> Result<AnyDriver, ConfigurationError> {
    let Some((_, build)) = REGISTRY.iter().find(|(name, _)| *name == ctx.driver.name) else {
        return Err(ConfigurationError::UnknownDriver {
            name: ctx.driver.name.clone(),
            valid: driver_names().join(", "),
        });
    };
    tracing::debug!(driver = %ctx.driver.name, scenario = ctx.scenario.name(), "selected driver");
    build(ctx)
}

// ── AnyDriver ────────────────────────────────────────────────────────────────

/// One of the built-in drivers.
#[derive(Debug, Clone)]
pub enum AnyDriver {
    Delegated(Delegated),
    Docker(Docker),
    Lxd(Lxd),
    Vagrant(Vagrant),
}

macro_rules! dispatch {
    ($self:ident, $d:ident => $body:expr) => {
        match $self {
            AnyDriver::Delegated($d) => $body,
            AnyDriver::Docker($d) => $body,
            AnyDriver::Lxd($d) => $body,
            AnyDriver::Vagrant($d) => $body,
        }
    };
}

impl Driver for AnyDriver {
    fn context(&self) -> &DriverContext {
        dispatch!(self, d => d.context())
    }

    fn name(&self) -> &str {
        dispatch!(self, d => d.name())
    }

    fn options(&self) -> &DriverOptions {
        dispatch!(self, d => d.options())
    }

    fn login_cmd_template(&self) -> Result<String> {
        dispatch!(self, d => d.login_cmd_template())
    }

    fn login_options(&self, instance_name: &str) -> Result<LoginOptions> {
        dispatch!(self, d => d.login_options(instance_name))
    }

    fn ansible_connection_options(&self, instance_name: &str) -> Result<ConnectionOptions> {
        dispatch!(self, d => d.ansible_connection_options(instance_name))
    }

    fn testinfra_options(&self) -> BTreeMap<String, String> {
        dispatch!(self, d => d.testinfra_options())
    }

    fn default_safe_files(&self) -> Vec<String> {
        dispatch!(self, d => d.default_safe_files())
    }

    fn safe_files(&self) -> Vec<String> {
        dispatch!(self, d => d.safe_files())
    }

    fn default_ssh_connection_options(&self) -> Vec<String> {
        dispatch!(self, d => d.default_ssh_connection_options())
    }

    fn ssh_connection_options(&self) -> Vec<String> {
        dispatch!(self, d => d.ssh_connection_options())
    }

    fn instance_config(&self) -> PathBuf {
        dispatch!(self, d => d.instance_config())
    }

    async fn status(&self, instances: &[PlatformDefinition]) -> Result<Vec<StatusRecord>> {
        dispatch!(self, d => d.status(instances).await)
    }
}

// ── Shared status ────────────────────────────────────────────────────────────

/// Status rows built from the scenario's `state.yml`.
///
/// Every instance of a scenario shares the scenario's lifecycle flags. A
/// missing state file reports `False`/`False`. `created_override` replaces
/// the created flag for drivers that do not own the instance lifecycle.
pub(crate) async fn state_status(
    driver: &impl Driver,
    instances: &[PlatformDefinition],
    created_override: Option<StatusFlag>,
) -> Result<Vec<StatusRecord>> {
    let ctx = driver.context();
    let store = ScenarioStateManager::with_path(ctx.scenario.state_file());
    let state = store.load_async().await?;

    let driver_name = capitalize(driver.name());
    let provisioner_name = capitalize(ctx.provisioner.name());
    let created = created_override.unwrap_or_else(|| state.created_flag());
    let converged = state.converged_flag();

    Ok(instances
        .iter()
        .map(|instance| StatusRecord {
            instance_name: instance.name.clone(),
            driver_name: driver_name.clone(),
            provisioner_name: provisioner_name.clone(),
            scenario_name: ctx.scenario.name().to_string(),
            created,
            converged,
        })
        .collect())
}
