//! Reader for the driver-written `instance_config.yml`.

use std::path::Path;

use crate::domain::{DriverError, InstanceConfigEntry};

/// Entries of the instance config at `path`.
///
/// Returns `Ok(None)` when the file does not exist yet (instances not
/// created). An empty file yields an empty list.
///
/// # Errors
///
/// Returns [`DriverError::Unreadable`] or
/// [`DriverError::MalformedInstanceConfig`].
pub fn read_entries(path: &Path) -> Result<Option<Vec<InstanceConfigEntry>>, DriverError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(DriverError::Unreadable {
                path: path.to_path_buf(),
                reason: e.to_string(),
            });
        }
    };
    if content.trim().is_empty() {
        return Ok(Some(Vec::new()));
    }
    serde_yaml::from_str(&content)
        .map(Some)
        .map_err(|e| DriverError::MalformedInstanceConfig {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
}

/// The entry for `instance_name`, failing if it has not been written.
///
/// # Errors
///
/// Returns [`DriverError::InstanceNotConfigured`] when the file or the entry
/// is missing, plus any [`read_entries`] error.
pub fn require_entry(path: &Path, instance_name: &str) -> Result<InstanceConfigEntry, DriverError> {
    read_entries(path)?
        .unwrap_or_default()
        .into_iter()
        .find(|e| e.instance == instance_name)
        .ok_or_else(|| DriverError::InstanceNotConfigured {
            instance: instance_name.to_string(),
            path: path.to_path_buf(),
        })
}

/// The entry for `instance_name`, or `None` when it has not been written.
///
/// # Errors
///
/// Same as [`read_entries`].
pub fn find_entry(path: &Path, instance_name: &str) -> Result<Option<InstanceConfigEntry>, DriverError> {
    Ok(read_entries(path)?
        .unwrap_or_default()
        .into_iter()
        .find(|e| e.instance == instance_name))
}
