//! Shared test helpers: scenario fixtures and exit-status constructors.

#![allow(dead_code)]

use std::path::Path;
use std::process::ExitStatus;

use molecule_cli::domain::config::{Config, MoleculeConfig};

// ── Cross-platform ExitStatus construction ───────────────────────────────────

/// Build an `ExitStatus` from a logical exit code (0 = success, non-zero = failure).
///
/// On Unix the raw wait-status encodes the exit code in bits 8–15, so we shift.
/// On Windows `ExitStatusExt::from_raw` takes the exit code directly.
#[cfg(unix)]
pub fn exit_status(code: i32) -> ExitStatus {
    use std::os::unix::process::ExitStatusExt;
    ExitStatus::from_raw(code << 8)
}

#[cfg(windows)]
pub fn exit_status(code: i32) -> ExitStatus {
    use std::os::windows::process::ExitStatusExt;
    #[allow(clippy::cast_sign_loss)]
    ExitStatus::from_raw(code as u32)
}

// ── Scenario fixtures ────────────────────────────────────────────────────────

/// Three platforms; the third opts out of scenario suffixing.
pub const PLATFORMS: &str = "\
platforms:
  - name: instance-1
    groups: [foo, bar]
  - name: instance-2
    groups: [baz, foo]
    children: [child1]
  - name: instance-3
    append_scenario: false
";

/// Assemble the `default` scenario of project `role` from `yaml`.
///
/// The ephemeral directory is `<ephemeral_root>/role/default`.
pub fn config(yaml: &str, ephemeral_root: &Path) -> Config {
    let raw: MoleculeConfig = serde_yaml::from_str(yaml).expect("valid yaml");
    Config::assemble(raw, "default", ephemeral_root, "role").expect("valid config")
}

/// `config` with `driver_section` prepended to [`PLATFORMS`].
pub fn config_with_driver(driver_section: &str, ephemeral_root: &Path) -> Config {
    config(&format!("{driver_section}{PLATFORMS}"), ephemeral_root)
}

/// Write `content` to `path`, creating parent directories.
pub fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("create parent dir");
    }
    std::fs::write(path, content).expect("write fixture");
}

/// Write the scenario's `state.yml`.
pub fn write_state(config: &Config, content: &str) {
    write_file(&config.scenario.state_file(), content);
}

/// Write the scenario's `instance_config.yml`.
pub fn write_instance_config(config: &Config, content: &str) {
    write_file(&config.scenario.instance_config(), content);
}

/// Instance config with one SSH entry per qualified instance name.
pub fn instance_config_for(names: &[&str]) -> String {
    names
        .iter()
        .enumerate()
        .map(|(i, name)| {
            format!(
                "- instance: {name}\n  address: 192.168.121.{}\n  user: vagrant\n  port: 22\n  identity_file: /tmp/key-{i}\n",
                10 + i
            )
        })
        .collect()
}

/// Lay out `<project>/molecule/<scenario>/molecule.yml`.
pub fn write_scenario(project: &Path, scenario: &str, yaml: &str) {
    write_file(&project.join("molecule").join(scenario).join("molecule.yml"), yaml);
}
