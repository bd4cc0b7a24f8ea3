//! Application service - instance status aggregation use-case.
//!
//! Imports only from `crate::domain` and `crate::application::ports`.
//! All backend access is routed through the injected [`Driver`].

use anyhow::Result;
use molecule_common::StatusRecord;

use crate::application::ports::Driver;
use crate::domain::{DriverError, Platforms};

/// Status of every instance declared by `platforms`, in declaration order.
///
/// The driver is queried exactly once with the scenario-qualified instance
/// list and its records are returned unmodified.
///
/// # Errors
///
/// Propagates any driver failure, and returns
/// [`DriverError::IncompleteStatus`] when the driver answers with a
/// different number of records than it was asked for.
pub async fn report(driver: &impl Driver, platforms: &Platforms) -> Result<Vec<StatusRecord>> {
    let instances = platforms.instances_with_scenario_name();
    let records = driver.status(&instances).await?;
    if records.len() != instances.len() {
        return Err(DriverError::IncompleteStatus {
            driver: driver.name().to_string(),
            expected: instances.len(),
            actual: records.len(),
        }
        .into());
    }
    Ok(records)
}

/// Concatenated [`report`] output for several scenarios, in the order given.
///
/// # Errors
///
/// Stops at the first scenario whose report fails; no partial list is
/// returned.
pub async fn report_all<'a, D, I>(scenarios: I) -> Result<Vec<StatusRecord>>
where
    D: Driver + 'a,
    I: IntoIterator<Item = (&'a D, &'a Platforms)>,
{
    let mut out = Vec::new();
    for (driver, platforms) in scenarios {
        out.extend(report(driver, platforms).await?);
    }
    Ok(out)
}
