//! Status aggregation over the driver contract.

use molecule_cli::application::services::instance_status::{report, report_all};
use molecule_cli::domain::{DriverError, NamingCollisionError};
use molecule_cli::infra::drivers::{self, AnyDriver};
use molecule_common::StatusFlag;

use crate::fakes::{FakeDriver, StatusBehaviour};
use crate::helpers::{PLATFORMS, config, config_with_driver, write_state};

#[tokio::test]
async fn test_report_queries_driver_once_with_qualified_names() {
    let dir = tempfile::tempdir().expect("tempdir");
    let cfg = config(PLATFORMS, dir.path());
    let driver = FakeDriver::new(cfg.driver_context(), StatusBehaviour::Echo);

    let records = report(&driver, &cfg.platforms).await.expect("report");

    assert_eq!(driver.status_calls.get(), 1);
    assert_eq!(
        *driver.last_instances.borrow(),
        ["instance-1-default", "instance-2-default", "instance-3"]
    );
    let names: Vec<&str> = records.iter().map(|r| r.instance_name.as_str()).collect();
    assert_eq!(names, ["instance-1-default", "instance-2-default", "instance-3"]);
}

#[tokio::test]
async fn test_report_leaves_catalog_untouched() {
    let dir = tempfile::tempdir().expect("tempdir");
    let cfg = config(PLATFORMS, dir.path());
    let before = cfg.platforms.clone();
    let driver = FakeDriver::new(cfg.driver_context(), StatusBehaviour::Echo);

    report(&driver, &cfg.platforms).await.expect("first");
    report(&driver, &cfg.platforms).await.expect("second");

    assert_eq!(cfg.platforms, before);
    assert_eq!(cfg.platforms.instances()[0].name, "instance-1");
}

#[tokio::test]
async fn test_report_rejects_short_answer() {
    let dir = tempfile::tempdir().expect("tempdir");
    let cfg = config(PLATFORMS, dir.path());
    let driver = FakeDriver::new(cfg.driver_context(), StatusBehaviour::DropLast);

    let err = report(&driver, &cfg.platforms).await.expect_err("short");
    assert!(matches!(
        err.downcast_ref::<DriverError>(),
        Some(DriverError::IncompleteStatus { expected: 3, actual: 2, .. })
    ));
}

#[tokio::test]
async fn test_report_propagates_driver_failure() {
    let dir = tempfile::tempdir().expect("tempdir");
    let cfg = config(PLATFORMS, dir.path());
    let driver = FakeDriver::new(cfg.driver_context(), StatusBehaviour::Fail);

    let err = report(&driver, &cfg.platforms).await.expect_err("fails");
    assert!(matches!(
        err.downcast_ref::<DriverError>(),
        Some(DriverError::MalformedState { .. })
    ));
}

#[test]
fn test_collision_is_raised_before_any_driver_call() {
    let dir = tempfile::tempdir().expect("tempdir");
    let raw: molecule_cli::domain::MoleculeConfig = serde_yaml::from_str(
        "platforms:\n  - name: web\n  - name: web-default\n    append_scenario: false\n",
    )
    .expect("yaml");
    let err = molecule_cli::domain::Config::assemble(raw, "default", dir.path(), "role")
        .expect_err("collision");
    let collision = err.downcast_ref::<NamingCollisionError>().expect("typed");
    assert_eq!(collision.name, "web-default");
    assert_eq!((collision.first, collision.second), (0, 1));
}

#[tokio::test]
async fn test_report_with_docker_reads_state() {
    let dir = tempfile::tempdir().expect("tempdir");
    let cfg = config_with_driver("driver:\n  name: docker\n", dir.path());
    write_state(&cfg, "created: true\nconverged: false\n");
    let driver = drivers::from_context(cfg.driver_context()).expect("docker");

    let records = report(&driver, &cfg.platforms).await.expect("report");
    assert_eq!(records.len(), 3);
    assert!(records.iter().all(|r| r.created == StatusFlag::True));
    assert!(records.iter().all(|r| r.converged == StatusFlag::False));
}

#[tokio::test]
async fn test_report_with_malformed_state_has_no_partial_result() {
    let dir = tempfile::tempdir().expect("tempdir");
    let cfg = config_with_driver("driver:\n  name: lxd\n", dir.path());
    write_state(&cfg, "created: [oops");
    let driver = drivers::from_context(cfg.driver_context()).expect("lxd");

    assert!(report(&driver, &cfg.platforms).await.is_err());
}

#[tokio::test]
async fn test_report_all_concatenates_in_order() {
    let a = tempfile::tempdir().expect("tempdir");
    let b = tempfile::tempdir().expect("tempdir");
    let first = config_with_driver("driver:\n  name: docker\n", a.path());
    let second = config("driver:\n  name: lxd\nplatforms:\n  - name: solo\n", b.path());
    let drivers: Vec<AnyDriver> = [&first, &second]
        .iter()
        .map(|c| drivers::from_context(c.driver_context()).expect("driver"))
        .collect();

    let records = report_all(drivers.iter().zip([&first.platforms, &second.platforms]))
        .await
        .expect("report");

    let rows: Vec<(&str, &str)> = records
        .iter()
        .map(|r| (r.instance_name.as_str(), r.driver_name.as_str()))
        .collect();
    assert_eq!(
        rows,
        [
            ("instance-1-default", "Docker"),
            ("instance-2-default", "Docker"),
            ("instance-3", "Docker"),
            ("solo-default", "Lxd"),
        ]
    );
}
