//! In-memory store for users and events.
//!
//! # Responsibility
//! - Hold every record for the process lifetime.
//! - Assign unique ids and creation timestamps inside one write section.
//!
//! # Invariants
//! - `*_order` vectors mirror map keys in insertion order.
//! - Ids are never reused; a colliding draw is discarded and redrawn.
//! - Records leave the store only as clones.

use crate::model::event::{Event, EventId, NewEvent};
use crate::model::user::{NewUser, User, UserId};
use crate::repo::clock::{Clock, SystemClock};
use crate::repo::{EventRepository, RepoError, RepoResult, UserRepository};
use crate::service::seed::seed_sample_events;
use log::{debug, info, warn};
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use uuid::Uuid;

#[derive(Default)]
struct StoreState {
    users: HashMap<UserId, User>,
    user_order: Vec<UserId>,
    events: HashMap<EventId, Event>,
    event_order: Vec<EventId>,
}

/// Process-local store backed by hash maps behind a single `RwLock`.
pub struct MemStore {
    state: RwLock<StoreState>,
    clock: Arc<dyn Clock>,
}

impl Default for MemStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemStore {
    /// Creates an empty store stamped by the wall clock.
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    /// Creates an empty store using a caller-supplied time source.
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            state: RwLock::new(StoreState::default()),
            clock,
        }
    }

    /// Creates a store pre-populated with the fixed sample events.
    pub fn with_sample_events() -> Self {
        let store = Self::new();
        let seeded = seed_sample_events(&store);
        info!(
            "event=store_seed module=store status=ok count={}",
            seeded.len()
        );
        store
    }

    pub fn event_count(&self) -> usize {
        self.read().event_order.len()
    }

    pub fn user_count(&self) -> usize {
        self.read().user_order.len()
    }

    fn read(&self) -> RwLockReadGuard<'_, StoreState> {
        // Writers only push fully built records, so a poisoned lock still
        // guards consistent state.
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, StoreState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}

fn fresh_id<V>(taken: &HashMap<Uuid, V>) -> Uuid {
    loop {
        let id = Uuid::new_v4();
        if !taken.contains_key(&id) {
            return id;
        }
        warn!("event=id_collision module=store status=retry id={id}");
    }
}

impl UserRepository for MemStore {
    fn create_user(&self, input: NewUser) -> RepoResult<User> {
        let mut state = self.write();

        let taken = state
            .user_order
            .iter()
            .filter_map(|id| state.users.get(id))
            .any(|user| user.username == input.username);
        if taken {
            debug!("event=user_create module=store status=rejected reason=username_taken");
            return Err(RepoError::UsernameTaken(input.username));
        }

        let id = fresh_id(&state.users);
        let user = User::from_new(id, input);
        state.users.insert(id, user.clone());
        state.user_order.push(id);

        debug!("event=user_create module=store status=ok id={id}");
        Ok(user)
    }

    fn get_user(&self, id: UserId) -> Option<User> {
        self.read().users.get(&id).cloned()
    }

    fn get_user_by_username(&self, username: &str) -> Option<User> {
        let state = self.read();
        state
            .user_order
            .iter()
            .filter_map(|id| state.users.get(id))
            .find(|user| user.username == username)
            .cloned()
    }
}

impl EventRepository for MemStore {
    fn create_event(&self, input: NewEvent) -> Event {
        let mut state = self.write();

        let id = fresh_id(&state.events);
        let event = Event::from_new(id, input, self.clock.now_epoch_ms());
        state.events.insert(id, event.clone());
        state.event_order.push(id);

        debug!(
            "event=event_create module=store status=ok id={id} created_at={}",
            event.created_at
        );
        event
    }

    fn get_event(&self, id: EventId) -> Option<Event> {
        self.read().events.get(&id).cloned()
    }

    fn list_events(&self) -> Vec<Event> {
        let state = self.read();
        let mut events: Vec<Event> = state
            .event_order
            .iter()
            .filter_map(|id| state.events.get(id))
            .cloned()
            .collect();
        // Stable sort: equal timestamps keep insertion order.
        events.sort_by_key(|event| event.created_at);
        events
    }
}

#[cfg(test)]
mod tests {
    use super::fresh_id;
    use std::collections::HashMap;
    use uuid::Uuid;

    #[test]
    fn fresh_id_avoids_taken_keys() {
        let mut taken = HashMap::new();
        for _ in 0..64 {
            let id = fresh_id(&taken);
            assert!(!id.is_nil());
            assert!(taken.insert(id, ()).is_none());
        }
        assert_eq!(taken.len(), 64);
        assert!(!taken.contains_key(&Uuid::nil()));
    }
}
