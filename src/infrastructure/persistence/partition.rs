use std::fmt;

use serde::{Deserialize, Serialize};

/// Layout version written into every partition document.
pub const SCHEMA_VERSION: u32 = 1;

/// The four independently persisted slices of application state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Partition {
    Auth,
    Olt,
    Onu,
    Settings,
}

impl Partition {
    pub const ALL: [Partition; 4] = [
        Partition::Auth,
        Partition::Olt,
        Partition::Onu,
        Partition::Settings,
    ];

    /// Stable storage key
    pub fn name(&self) -> &'static str {
        match self {
            Partition::Auth => "auth",
            Partition::Olt => "olt",
            Partition::Onu => "onu",
            Partition::Settings => "settings",
        }
    }

    pub fn file_name(&self) -> String {
        format!("{}.json", self.name())
    }
}

impl fmt::Display for Partition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// On-disk envelope: `{"version": 1, "state": {...}}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartitionDocument {
    pub version: u32,
    pub state: serde_json::Value,
}

impl PartitionDocument {
    pub fn new(state: serde_json::Value) -> Self {
        Self {
            version: SCHEMA_VERSION,
            state,
        }
    }

    pub fn is_current(&self) -> bool {
        self.version == SCHEMA_VERSION
    }
}
