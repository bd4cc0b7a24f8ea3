//! `molecule list` collection across loaded scenarios.

use molecule_cli::commands::list::collect;
use molecule_cli::domain::ConfigurationError;
use molecule_cli::infra::config::ScenarioConfigLoader;
use molecule_common::StatusFlag;

use crate::helpers::{PLATFORMS, write_file, write_scenario};

#[tokio::test]
async fn test_collect_every_scenario_in_directory_order() {
    let project = tempfile::tempdir().expect("tempdir");
    let eph = tempfile::tempdir().expect("tempdir");
    write_scenario(project.path(), "default", &format!("driver:\n  name: docker\n{PLATFORMS}"));
    write_scenario(project.path(), "cluster", "driver:\n  name: lxd\nplatforms:\n  - name: node\n");

    let loader = ScenarioConfigLoader::with_ephemeral_root(project.path(), eph.path());
    let configs = loader.load_selected(None).expect("load");
    let records = collect(&configs).await.expect("collect");

    let names: Vec<&str> = records.iter().map(|r| r.instance_name.as_str()).collect();
    assert_eq!(
        names,
        ["node-cluster", "instance-1-default", "instance-2-default", "instance-3"]
    );
    assert_eq!(records[0].scenario_name, "cluster");
    assert_eq!(records[1].scenario_name, "default");
}

#[tokio::test]
async fn test_collect_reads_each_scenario_state() {
    let project = tempfile::tempdir().expect("tempdir");
    let eph = tempfile::tempdir().expect("tempdir");
    write_scenario(project.path(), "default", PLATFORMS);

    let loader = ScenarioConfigLoader::with_ephemeral_root(project.path(), eph.path());
    let configs = loader.load_selected(Some("default")).expect("load");
    write_file(&configs[0].scenario.state_file(), "created: true\nconverged: true\n");

    let records = collect(&configs).await.expect("collect");
    assert!(records.iter().all(|r| r.created == StatusFlag::True));
    assert!(records.iter().all(|r| r.converged == StatusFlag::True));
}

#[tokio::test]
async fn test_collect_rejects_unknown_driver() {
    let project = tempfile::tempdir().expect("tempdir");
    let eph = tempfile::tempdir().expect("tempdir");
    write_scenario(project.path(), "default", &format!("driver:\n  name: ec2\n{PLATFORMS}"));

    let loader = ScenarioConfigLoader::with_ephemeral_root(project.path(), eph.path());
    let configs = loader.load_selected(None).expect("load");
    let err = collect(&configs).await.expect_err("unknown driver");
    assert!(matches!(
        err.downcast_ref::<ConfigurationError>(),
        Some(ConfigurationError::UnknownDriver { name, .. }) if name == "ec2"
    ));
}
