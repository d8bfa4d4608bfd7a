/// Status snapshots reported by the project server
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The latest known lifecycle state of a project.
///
/// Only `status` is required. Anything else the server sends is kept
/// verbatim in `extra` so it can be shown, but nothing interprets it.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct StatusSnapshot {
    pub status: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl StatusSnapshot {
    pub fn new(status: impl Into<String>) -> Self {
        Self {
            status: status.into(),
            extra: Map::new(),
        }
    }

    /// Parse a status endpoint body.
    pub fn from_json(body: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(body)
    }

    pub fn state(&self) -> LifecycleState {
        LifecycleState::classify(&self.status)
    }
}

/// Known lifecycle states. The vocabulary belongs to the server, so
/// anything unrecognised is carried through as `Other`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LifecycleState {
    Booting,
    Running,
    Halting,
    Halted,
    Failed,
    Other(String),
}

impl LifecycleState {
    pub fn classify(status: &str) -> Self {
        match status {
            "booting" => LifecycleState::Booting,
            "running" => LifecycleState::Running,
            "halting" => LifecycleState::Halting,
            "halted" => LifecycleState::Halted,
            "failed" => LifecycleState::Failed,
            other => LifecycleState::Other(other.to_string()),
        }
    }

    /// True once the instance will not come back on its own.
    pub fn is_terminal(&self) -> bool {
        matches!(self, LifecycleState::Halting | LifecycleState::Halted | LifecycleState::Failed)
    }
}

pub fn format_status(status: &str) -> String {
    match status.to_lowercase().as_str() {
        "booting" => "Booting".to_string(),
        "running" => "Running".to_string(),
        "halting" => "Halting".to_string(),
        "halted" => "Halted".to_string(),
        "failed" => "Failed".to_string(),
        _ => status.to_string(),
    }
}
