//! Outcome of a probing pass.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Reachability of a single target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Status {
    Up,
    Down,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Up => "UP",
            Status::Down => "DOWN",
        }
    }

    pub fn is_up(&self) -> bool {
        matches!(self, Status::Up)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Name to [`Status`] mapping produced by one pass.
///
/// Serializes as a flat object, e.g. `{"backend":"UP","redis":"DOWN"}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatusReport {
    entries: BTreeMap<String, Status>,
}

impl StatusReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the status for `name`, replacing any earlier entry.
    pub fn insert(&mut self, name: impl Into<String>, status: Status) {
        self.entries.insert(name.into(), status);
    }

    pub fn get(&self, name: &str) -> Option<Status> {
        self.entries.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn up_count(&self) -> usize {
        self.entries.values().filter(|s| s.is_up()).count()
    }

    pub fn down_count(&self) -> usize {
        self.len() - self.up_count()
    }

    pub fn all_up(&self) -> bool {
        self.down_count() == 0
    }

    /// Flattens the report into `name -> "UP" | "DOWN"`.
    pub fn to_string_map(&self) -> BTreeMap<String, String> {
        self.entries
            .iter()
            .map(|(name, status)| (name.clone(), status.to_string()))
            .collect()
    }
}

impl FromIterator<(String, Status)> for StatusReport {
    fn from_iter<I: IntoIterator<Item = (String, Status)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
