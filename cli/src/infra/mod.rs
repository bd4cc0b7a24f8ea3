//! Infrastructure layer - concrete implementations of application port traits.
//!
//! This module contains all I/O-performing code: process execution, scenario
//! file loading, driver-written metadata readers and the concrete drivers.
//!
//! Imports from `crate::domain` and `crate::application::ports` are allowed.
//! Imports from `crate::commands` or `crate::output` are forbidden.

pub mod command_runner;
pub mod config;
pub mod drivers;
pub mod instance_config;
pub mod state;
