//! Domain events emitted by Folio repositories.
//!
//! Events are published on the service layer's event bus and consumed
//! by views that must refresh after the collection changes (an import
//! replaces the whole collection, so dependent views reload instead of
//! the page being reloaded).

pub mod project;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub use project::ProjectEvent;

/// Wrapper for all domain events with metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DomainEvent {
    /// Unique event ID.
    pub id: Uuid,
    /// When the event occurred.
    pub timestamp: DateTime<Utc>,
    /// The event payload.
    pub payload: EventPayload,
}

/// Union of all domain event types.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "domain", content = "event")]
pub enum EventPayload {
    /// A project-collection event.
    Project(ProjectEvent),
}

impl DomainEvent {
    /// Create a new domain event.
    pub fn new(payload: EventPayload) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            payload,
        }
    }

    /// Create a new project event.
    pub fn project(event: ProjectEvent) -> Self {
        Self::new(EventPayload::Project(event))
    }

    /// Whether views holding a copy of the collection must reload.
    pub fn invalidates_collection(&self) -> bool {
        match &self.payload {
            EventPayload::Project(event) => event.invalidates_collection(),
        }
    }
}
