use serde::{Deserialize, Serialize};

/// Column headers of the status table, in record field order.
pub const STATUS_HEADERS: [&str; 6] = [
    "Instance Name",
    "Driver Name",
    "Provisioner Name",
    "Scenario Name",
    "Created",
    "Converged",
];

/// Tri-state flag rendered as the strings `True`, `False` or `Skipped`.
///
/// The string form is part of the output contract: tables and JSON both
/// carry the capitalised words rather than native booleans.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum StatusFlag {
    True,
    #[default]
    False,
    Skipped,
}

impl StatusFlag {
    /// The user-facing string for this flag.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::True => "True",
            Self::False => "False",
            Self::Skipped => "Skipped",
        }
    }
}

impl From<bool> for StatusFlag {
    fn from(value: bool) -> Self {
        if value { Self::True } else { Self::False }
    }
}

impl std::fmt::Display for StatusFlag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl PartialEq<str> for StatusFlag {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for StatusFlag {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

/// One row of the status table: a single instance within one scenario.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatusRecord {
    pub instance_name: String,
    pub driver_name: String,
    pub provisioner_name: String,
    pub scenario_name: String,
    pub created: StatusFlag,
    pub converged: StatusFlag,
}

impl StatusRecord {
    /// Field values in the same order as [`STATUS_HEADERS`].
    #[must_use]
    pub fn columns(&self) -> [&str; 6] {
        [
            &self.instance_name,
            &self.driver_name,
            &self.provisioner_name,
            &self.scenario_name,
            self.created.as_str(),
            self.converged.as_str(),
        ]
    }
}

/// Capitalise a display name the way status rows show it: first character
/// upper-cased, the rest lower-cased (`docker` → `Docker`, `LXD` → `Lxd`).
#[must_use]
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
