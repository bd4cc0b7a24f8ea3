//! Application service - interactive login use-case.
//!
//! Imports only from `crate::domain` and `crate::application::ports`.

use anyhow::{Result, bail};
use molecule_common::StatusFlag;

use crate::application::ports::{CommandRunner, Driver};
use crate::domain::driver::{render_template, split_command};
use crate::domain::{ConfigurationError, DriverError, PlatformDefinition, Platforms};

/// Pick the single qualified instance `host` refers to.
///
/// Without a host the scenario must have exactly one instance. A host
/// matches every instance name it prefixes; an exact match wins over
/// other prefix matches.
///
/// # Errors
///
/// Returns [`ConfigurationError::UnknownHost`] when nothing matches and
/// [`ConfigurationError::AmbiguousHost`] when more than one instance does.
pub fn resolve_host(platforms: &Platforms, host: Option<&str>) -> Result<String, ConfigurationError> {
    let names = platforms.instance_names();
    let available = names.join(", ");
    let needle = host.unwrap_or_default();

    let matches: Vec<&String> = names.iter().filter(|n| n.starts_with(needle)).collect();
    match matches.as_slice() {
        [] => Err(ConfigurationError::UnknownHost {
            host: needle.to_string(),
            available,
        }),
        [only] => Ok((*only).clone()),
        many => {
            if let Some(exact) = host.and_then(|h| many.iter().find(|n| n.as_str() == h)) {
                return Ok((*exact).clone());
            }
            Err(ConfigurationError::AmbiguousHost {
                host: needle.to_string(),
                count: many.len(),
                available,
            })
        }
    }
}

/// Fail unless the driver reports `instance_name` as created.
///
/// Drivers that do not track creation report `Skipped`, which passes.
///
/// # Errors
///
/// Returns [`DriverError::NotCreated`], or any status error.
pub async fn ensure_created(driver: &impl Driver, instance_name: &str) -> Result<()> {
    let records = driver
        .status(&[PlatformDefinition::named(instance_name)])
        .await?;
    match records.first().map(|r| r.created) {
        Some(StatusFlag::True | StatusFlag::Skipped) => Ok(()),
        _ => Err(DriverError::NotCreated {
            instance: instance_name.to_string(),
        }
        .into()),
    }
}

/// The argv that attaches an interactive shell to `instance_name`.
///
/// # Errors
///
/// Returns an error if the driver has no login template, its login options
/// cannot be resolved, or the template references an unbound key.
pub fn login_command(driver: &impl Driver, instance_name: &str) -> Result<Vec<String>> {
    let template = driver.login_cmd_template()?;
    let options = driver.login_options(instance_name)?;
    let rendered = render_template(&template, &options)?;
    let argv = split_command(&rendered)?;
    if argv.is_empty() {
        bail!("login command for '{instance_name}' is empty");
    }
    Ok(argv)
}

/// Run a login argv built by [`login_command`] with inherited stdio.
///
/// # Errors
///
/// Returns an error if `argv` is empty or the program cannot be spawned.
pub async fn login(
    runner: &impl CommandRunner,
    argv: &[String],
) -> Result<std::process::ExitStatus> {
    let Some((program, rest)) = argv.split_first() else {
        bail!("login command is empty");
    };
    let args: Vec<&str> = rest.iter().map(String::as_str).collect();
    runner.run_status(program, &args).await
}
