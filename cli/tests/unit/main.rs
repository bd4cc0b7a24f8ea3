//! Unit tests for the molecule CLI
//!
//! These tests use fakes and temporary directories and run fast without
//! touching real infrastructure.

#![allow(clippy::expect_used)]

mod delegated_driver;
mod fakes;
mod helpers;
mod list_command;
mod status_report;
