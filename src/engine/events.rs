//! Structured notification events emitted by the engine
//!
//! Presentation (screens, alarms, logs) is entirely the host's
//! responsibility; the engine only states what happened.

use serde::{Deserialize, Serialize};

/// What a notification is about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventKind {
    /// A part transitioned to failed
    Failure,
    /// A part was repaired back into service
    Repair,
    /// A maintenance transaction was refused
    MaintenanceDenied,
    /// A repair transaction was refused
    RepairDenied,
}

/// Notification event handed to the host's message sink
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReliabilityEvent {
    pub kind: EventKind,
    pub message: String,
    /// When set, the host should log the event without alerting
    pub silent: bool,
}

impl ReliabilityEvent {
    pub fn failure(message: impl Into<String>, silent: bool) -> Self {
        Self {
            kind: EventKind::Failure,
            message: message.into(),
            silent,
        }
    }

    pub fn repair(message: impl Into<String>) -> Self {
        Self {
            kind: EventKind::Repair,
            message: message.into(),
            silent: false,
        }
    }

    pub fn maintenance_denied(message: impl Into<String>) -> Self {
        Self {
            kind: EventKind::MaintenanceDenied,
            message: message.into(),
            silent: false,
        }
    }

    pub fn repair_denied(message: impl Into<String>) -> Self {
        Self {
            kind: EventKind::RepairDenied,
            message: message.into(),
            silent: false,
        }
    }
}
