//! Delegated driver: managed and unmanaged modes.

use molecule_cli::application::ports::Driver;
use molecule_cli::domain::{Config, ConfigurationError};
use molecule_cli::infra::drivers::{self, Delegated};
use molecule_common::StatusFlag;

use crate::helpers::{config_with_driver, instance_config_for, write_instance_config, write_state};

fn delegated(root: &std::path::Path, driver_section: &str) -> (Delegated, Config) {
    let cfg = config_with_driver(driver_section, root);
    (Delegated::new(cfg.driver_context()).expect("valid options"), cfg)
}

const MANAGED: &str = "driver:\n  name: delegated\n";

const UNMANAGED: &str = "\
driver:
  name: delegated
  options:
    managed: false
    login_cmd_template: 'docker exec -ti {instance} bash'
    ansible_connection_options:
      ansible_connection: docker
";

#[test]
fn test_managed_by_default() {
    let dir = tempfile::tempdir().expect("tempdir");
    let (d, _) = delegated(dir.path(), MANAGED);
    assert!(d.managed());
    assert_eq!(d.default_ssh_connection_options().len(), 5);
    assert!(d.default_safe_files().is_empty());
}

#[test]
fn test_managed_uses_ssh_template_and_instance_config() {
    let dir = tempfile::tempdir().expect("tempdir");
    let (d, cfg) = delegated(dir.path(), MANAGED);
    write_instance_config(&cfg, &instance_config_for(&["instance-1-default"]));

    assert!(d.login_cmd_template().expect("template").starts_with("ssh {address}"));
    let opts = d.login_options("instance-1-default").expect("options");
    assert_eq!(opts["address"], "192.168.121.10");
    let conn = d.ansible_connection_options("instance-1-default").expect("conn");
    assert_eq!(conn["connection"], "ssh");
}

#[test]
fn test_unmanaged_uses_declared_options() {
    let dir = tempfile::tempdir().expect("tempdir");
    let (d, _) = delegated(dir.path(), UNMANAGED);

    assert!(!d.managed());
    assert_eq!(
        d.login_cmd_template().expect("template"),
        "docker exec -ti {instance} bash"
    );
    assert_eq!(d.login_options("foo").expect("options")["instance"], "foo");
    let conn = d.ansible_connection_options("foo").expect("conn");
    assert_eq!(conn.len(), 1);
    assert_eq!(conn["ansible_connection"], "docker");
    assert!(d.default_ssh_connection_options().is_empty());
}

#[test]
fn test_unmanaged_without_template_cannot_login() {
    let dir = tempfile::tempdir().expect("tempdir");
    let (d, _) = delegated(dir.path(), "driver:\n  name: delegated\n  options:\n    managed: false\n");
    let err = d.login_cmd_template().expect_err("no template");
    assert!(matches!(
        err.downcast_ref::<ConfigurationError>(),
        Some(ConfigurationError::InvalidDriverOption { key, .. }) if key == "login_cmd_template"
    ));
}

#[test]
fn test_non_boolean_managed_is_rejected_at_construction() {
    let dir = tempfile::tempdir().expect("tempdir");
    let cfg = config_with_driver(
        "driver:\n  name: delegated\n  options:\n    managed: 'no'\n",
        dir.path(),
    );
    let err = Delegated::new(cfg.driver_context()).expect_err("not a boolean");
    assert!(matches!(
        err,
        ConfigurationError::InvalidDriverOption { ref key, .. } if key == "managed"
    ));
    assert!(drivers::from_context(cfg.driver_context()).is_err());
}

#[test]
fn test_non_string_login_template_is_rejected_at_construction() {
    let dir = tempfile::tempdir().expect("tempdir");
    let cfg = config_with_driver(
        "driver:\n  name: delegated\n  options:\n    login_cmd_template: [ssh]\n",
        dir.path(),
    );
    let err = drivers::from_context(cfg.driver_context()).expect_err("not a string");
    assert!(matches!(
        err,
        ConfigurationError::InvalidDriverOption { ref key, .. } if key == "login_cmd_template"
    ));
}

#[tokio::test]
async fn test_unmanaged_status_reports_created_skipped() {
    let dir = tempfile::tempdir().expect("tempdir");
    let (d, cfg) = delegated(dir.path(), UNMANAGED);
    write_state(&cfg, "converged: true\n");

    let records = d
        .status(&cfg.platforms.instances_with_scenario_name())
        .await
        .expect("status");
    assert_eq!(records.len(), 3);
    for r in &records {
        assert_eq!(r.driver_name, "Delegated");
        assert_eq!(r.created, StatusFlag::Skipped);
        assert_eq!(r.converged, StatusFlag::True);
    }
}

#[tokio::test]
async fn test_managed_status_follows_state() {
    let dir = tempfile::tempdir().expect("tempdir");
    let (d, cfg) = delegated(dir.path(), MANAGED);
    write_state(&cfg, "created: true\n");

    let records = d
        .status(&cfg.platforms.instances_with_scenario_name())
        .await
        .expect("status");
    assert!(records.iter().all(|r| r.created == StatusFlag::True));
    assert!(records.iter().all(|r| r.converged == StatusFlag::False));
}
