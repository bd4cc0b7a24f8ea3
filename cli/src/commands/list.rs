//! `molecule list` - status of every instance across scenarios.

use anyhow::Result;
use clap::Args;
use molecule_common::StatusRecord;

use crate::app::AppContext;
use crate::application::services::instance_status;
use crate::domain::Config;
use crate::infra::drivers;
use crate::output::ListFormat;

/// Arguments for the list command.
#[derive(Args)]
pub struct ListArgs {
    /// Name of the scenario to target (all scenarios when omitted)
    #[arg(short, long = "scenario-name")]
    pub scenario_name: Option<String>,

    /// Table layout
    #[arg(short, long, value_enum, default_value_t = ListFormat::Simple)]
    pub format: ListFormat,
}

/// Run `molecule list [-s <scenario>] [-f <format>]`.
///
/// # Errors
///
/// Returns an error if a scenario cannot be loaded, names an unknown
/// driver, or its driver fails to report status.
pub async fn run(app: &AppContext, args: &ListArgs) -> Result<()> {
    let configs = app.loader.load_selected(args.scenario_name.as_deref())?;
    let records = collect(&configs).await?;
    app.renderer().render_status(&records, args.format)
}

/// Status records of every scenario in `configs`, in order.
///
/// All drivers are built before any is queried, so an unknown driver in a
/// later scenario fails the whole listing up front.
///
/// # Errors
///
/// Returns the first driver construction or status error.
pub async fn collect(configs: &[Config]) -> Result<Vec<StatusRecord>> {
    let drivers = configs
        .iter()
        .map(|c| drivers::from_context(c.driver_context()))
        .collect::<Result<Vec<_>, _>>()?;
    tracing::debug!(scenarios = configs.len(), "collecting instance status");
    instance_status::report_all(drivers.iter().zip(configs.iter().map(|c| &c.platforms))).await
}
