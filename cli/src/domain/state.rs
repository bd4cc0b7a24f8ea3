//! Scenario lifecycle state as written by drivers to `state.yml`.
//!
//! Pure data - loading and saving live in `crate::infra::state`.

use molecule_common::StatusFlag;
use serde::{Deserialize, Deserializer, Serialize};

/// Lifecycle flags of one scenario.
///
/// A scenario that has never been created has no state file; that case is
/// represented by `ScenarioState::default()` (everything false).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioState {
    #[serde(deserialize_with = "null_as_false")]
    pub created: bool,
    #[serde(deserialize_with = "null_as_false")]
    pub converged: bool,
    #[serde(deserialize_with = "null_as_false")]
    pub prepared: bool,
    /// Driver that created the instances, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub driver: Option<String>,
}

/// Drivers write `null` for flags they have not set yet.
fn null_as_false<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(false))
}

impl ScenarioState {
    #[must_use]
    pub fn created_flag(&self) -> StatusFlag {
        StatusFlag::from(self.created)
    }

    #[must_use]
    pub fn converged_flag(&self) -> StatusFlag {
        StatusFlag::from(self.converged)
    }
}
