//! `molecule login` - attach an interactive shell to one instance.

use anyhow::Result;
use clap::Args;

use crate::app::AppContext;
use crate::application::services::login;
use crate::domain::scenario::DEFAULT_SCENARIO;
use crate::infra::drivers;

/// Arguments for the login command.
#[derive(Args)]
pub struct LoginArgs {
    /// Host to access (any unique prefix of an instance name)
    #[arg(long)]
    pub host: Option<String>,

    /// Name of the scenario to target
    #[arg(short, long = "scenario-name", default_value = DEFAULT_SCENARIO)]
    pub scenario_name: String,
}

/// Run `molecule login [--host <h>] [-s <scenario>]`.
///
/// Exits the process with the login session's exit code when it is
/// non-zero.
///
/// # Errors
///
/// Returns an error if the scenario cannot be loaded, the host does not
/// resolve to exactly one instance, the instance has not been created, or
/// the login command cannot be built or spawned.
pub async fn run(app: &AppContext, args: &LoginArgs) -> Result<()> {
    let config = app.loader.load(&args.scenario_name)?;
    let driver = drivers::from_context(config.driver_context())?;
    let host = login::resolve_host(&config.platforms, args.host.as_deref())?;
    login::ensure_created(&driver, &host).await?;

    let argv = login::login_command(&driver, &host)?;
    tracing::debug!(instance = %host, command = ?argv, "logging in");
    app.output.info(&format!("Logging in to {host}"));

    let status = login::login(&app.runner, &argv).await?;
    if !status.success() {
        std::process::exit(status.code().unwrap_or(1));
    }
    Ok(())
}
