//! Store change events
//!
//! Published after every effective mutation so that open screens can
//! re-derive their views.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::infrastructure::persistence::Partition;

/// Event types for notifications
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum Event {
    OltAdded { olt_id: String },
    OltUpdated { olt_id: String },
    OltDeleted { olt_id: String },
    OnuAdded { onu_id: String },
    OnuUpdated { onu_id: String },
    OnuDeleted { onu_id: String },
    UserAdded { user_id: String },
    SessionStarted { user_id: String },
    SessionEnded,
    SettingsChanged,
    /// Persisted state was rehydrated at launch
    Rehydrated,
    /// All partitions were purged and the stores reset to seed
    StatePurged,
}

impl Event {
    /// Get the event type name
    pub fn event_type(&self) -> &'static str {
        match self {
            Event::OltAdded { .. } => "olt_added",
            Event::OltUpdated { .. } => "olt_updated",
            Event::OltDeleted { .. } => "olt_deleted",
            Event::OnuAdded { .. } => "onu_added",
            Event::OnuUpdated { .. } => "onu_updated",
            Event::OnuDeleted { .. } => "onu_deleted",
            Event::UserAdded { .. } => "user_added",
            Event::SessionStarted { .. } => "session_started",
            Event::SessionEnded => "session_ended",
            Event::SettingsChanged => "settings_changed",
            Event::Rehydrated => "rehydrated",
            Event::StatePurged => "state_purged",
        }
    }

    /// Partition whose contents changed, if the event stems from one store
    pub fn partition(&self) -> Option<Partition> {
        match self {
            Event::OltAdded { .. } | Event::OltUpdated { .. } | Event::OltDeleted { .. } => {
                Some(Partition::Olt)
            }
            Event::OnuAdded { .. } | Event::OnuUpdated { .. } | Event::OnuDeleted { .. } => {
                Some(Partition::Onu)
            }
            Event::UserAdded { .. } | Event::SessionStarted { .. } | Event::SessionEnded => {
                Some(Partition::Auth)
            }
            Event::SettingsChanged => Some(Partition::Settings),
            Event::Rehydrated | Event::StatePurged => None,
        }
    }
}

/// Envelope delivered to subscribers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventMessage {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    #[serde(flatten)]
    pub event: Event,
}

impl EventMessage {
    pub fn new(event: Event) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            event,
        }
    }
}
