//! Event use-case service.
//!
//! # Responsibility
//! - Provide event create/get/list entry points for API and CLI callers.
//! - Compose store listings with the category filter.
//!
//! # Invariants
//! - Service APIs never bypass the repository contract.
//! - Listings keep store order (creation time, then insertion).

use crate::filter::CategoryFilter;
use crate::model::event::{Event, EventId, NewEvent};
use crate::repo::EventRepository;
use log::info;

/// Use-case service wrapper for event operations.
pub struct EventService<R: EventRepository> {
    repo: R,
}

impl<R: EventRepository> EventService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates an event; the store assigns `id` and `created_at`.
    pub fn create_event(&self, input: NewEvent) -> Event {
        let event = self.repo.create_event(input);
        info!(
            "event=event_create module=service status=ok id={} category_len={}",
            event.id,
            event.category.len()
        );
        event
    }

    /// Gets one event by ID. `None` means not found.
    pub fn get_event(&self, id: EventId) -> Option<Event> {
        self.repo.get_event(id)
    }

    /// Lists every event ordered by creation time.
    pub fn list_events(&self) -> Vec<Event> {
        self.repo.list_events()
    }

    /// Lists events matching `filter`, in listing order.
    pub fn list_events_in_category(&self, filter: &CategoryFilter) -> Vec<Event> {
        filter.apply(&self.repo.list_events())
    }
}
