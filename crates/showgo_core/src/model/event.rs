//! Event domain model.
//!
//! # Responsibility
//! - Define the listed music event record and its insert payload.
//!
//! # Invariants
//! - `id` is stable and never reused for another event.
//! - `created_at` is stamped once at creation and only used for ordering.
//! - `tags` keeps caller order; a missing list becomes empty.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a listed event.
pub type EventId = Uuid;

/// Listed music event.
///
/// Serialized with camelCase keys (`imageUrl`, `createdAt`) to match the
/// external wire schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: EventId,
    pub name: String,
    pub description: String,
    /// City-level location, e.g. `New York, NY`.
    pub location: String,
    pub venue: String,
    /// Free text, e.g. `August 25`.
    pub date: String,
    /// Free text, e.g. `8:00 PM`.
    pub time: String,
    /// Free text; informally one of the known category chips.
    pub category: String,
    pub tags: Vec<String>,
    pub image_url: String,
    /// Unix epoch milliseconds.
    pub created_at: i64,
}

impl Event {
    /// Builds the stored record from an insert payload.
    pub fn from_new(id: EventId, input: NewEvent, created_at: i64) -> Self {
        Self {
            id,
            name: input.name,
            description: input.description,
            location: input.location,
            venue: input.venue,
            date: input.date,
            time: input.time,
            category: input.category,
            tags: input.tags.unwrap_or_default(),
            image_url: input.image_url,
            created_at,
        }
    }
}

/// Insert payload for an event.
///
/// Every field except `tags` is required on the wire; values are stored
/// verbatim, empty strings included.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEvent {
    pub name: String,
    pub description: String,
    pub location: String,
    pub venue: String,
    pub date: String,
    pub time: String,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    pub image_url: String,
}
