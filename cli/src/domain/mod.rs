//! Domain layer - pure business logic, types, and validation.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, `std::process`, or `std::net`.
//! All functions are synchronous and take data in, returning data out.

pub mod config;
pub mod driver;
pub mod error;
pub mod instance_config;
pub mod platform;
pub mod scenario;
pub mod state;

pub use config::{Config, MoleculeConfig};
pub use driver::{ConnectionOptions, DriverConfig, DriverContext, DriverOptions, LoginOptions};
pub use error::{ConfigurationError, DriverError, NamingCollisionError};
pub use instance_config::InstanceConfigEntry;
pub use platform::{PlatformDefinition, Platforms, RawPlatform, qualify};
pub use scenario::{Provisioner, Scenario};
pub use state::ScenarioState;
