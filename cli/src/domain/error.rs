//! Typed domain error enums.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, `std::process`, or `std::net`.
//! All error types implement `thiserror::Error` and convert to `anyhow::Error`
//! via the `?` operator.

use std::path::PathBuf;

use thiserror::Error;

// ── Configuration errors ──────────────────────────────────────────────────────

/// Malformed or incomplete platform, driver or scenario declarations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("Platform entry #{index} is missing a 'name'.")]
    MissingPlatformName { index: usize },

    #[error("No platforms declared. Add at least one entry under 'platforms'.")]
    NoPlatforms,

    #[error("Scenario name must not be empty.")]
    EmptyScenarioName,

    #[error("Unknown driver: {name}\n\nValid drivers: {valid}")]
    UnknownDriver { name: String, valid: String },

    #[error("Invalid driver option '{key}': {reason}")]
    InvalidDriverOption { key: String, reason: String },

    #[error("Scenario '{0}' not found.")]
    UnknownScenario(String),

    #[error("Unable to find 'molecule/*/molecule.yml' under {}.", .0.display())]
    NoScenarios(PathBuf),

    #[error("There are no hosts that match '{host}'.\n\nAvailable hosts: {available}")]
    UnknownHost { host: String, available: String },

    #[error(
        "There are {count} hosts that match '{host}'. You can only login to one at a time.\n\nAvailable hosts: {available}"
    )]
    AmbiguousHost {
        host: String,
        count: usize,
        available: String,
    },
}

// ── Driver errors ─────────────────────────────────────────────────────────────

/// Backend metadata could not be read or did not make sense.
#[derive(Debug, Error)]
pub enum DriverError {
    #[error("cannot read {path}: {reason}")]
    Unreadable { path: PathBuf, reason: String },

    #[error("malformed state file {path}: {reason}")]
    MalformedState { path: PathBuf, reason: String },

    #[error("malformed instance config {path}: {reason}")]
    MalformedInstanceConfig { path: PathBuf, reason: String },

    #[error("instance '{instance}' not found in {path}. Has it been created?")]
    InstanceNotConfigured { instance: String, path: PathBuf },

    #[error("Instance '{instance}' is not created. Please create instances first.")]
    NotCreated { instance: String },

    #[error("login template references '{{{key}}}' but no value is bound to it")]
    UnboundTemplateKey { key: String },

    #[error("login command has an unterminated quote: {command}")]
    MalformedLoginCommand { command: String },

    #[error("{driver} driver reported {actual} status rows for {expected} instances")]
    IncompleteStatus {
        driver: String,
        expected: usize,
        actual: usize,
    },
}

// ── Naming errors ─────────────────────────────────────────────────────────────

/// Two platform entries resolve to the same instance name in one scenario.
#[derive(Debug, Error, PartialEq, Eq)]
#[error(
    "Instance name '{name}' is used by platform entries #{first} and #{second} in scenario '{scenario}'."
)]
pub struct NamingCollisionError {
    pub name: String,
    pub scenario: String,
    pub first: usize,
    pub second: usize,
}
