//! Store contracts and the in-memory implementation.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts for users and events.
//! - Own identifier generation and creation timestamps.
//!
//! # Invariants
//! - Point lookups signal absence with `None`, never with an error.
//! - `list_events` is ordered by `created_at` ascending, ties broken by
//!   insertion order.
//! - Usernames are unique; the check and the insert share one write lock.

pub mod clock;
pub mod mem_store;

use crate::model::event::{Event, EventId, NewEvent};
use crate::model::user::{NewUser, User, UserId};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Store write errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    /// Another user already holds this username.
    UsernameTaken(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UsernameTaken(username) => write!(f, "username already taken: {username}"),
        }
    }
}

impl Error for RepoError {}

/// Repository interface for user records.
pub trait UserRepository {
    fn create_user(&self, input: NewUser) -> RepoResult<User>;
    fn get_user(&self, id: UserId) -> Option<User>;
    fn get_user_by_username(&self, username: &str) -> Option<User>;
}

/// Repository interface for event records.
pub trait EventRepository {
    fn create_event(&self, input: NewEvent) -> Event;
    fn get_event(&self, id: EventId) -> Option<Event>;
    fn list_events(&self) -> Vec<Event>;
}

impl<T: UserRepository + ?Sized> UserRepository for &T {
    fn create_user(&self, input: NewUser) -> RepoResult<User> {
        (**self).create_user(input)
    }

    fn get_user(&self, id: UserId) -> Option<User> {
        (**self).get_user(id)
    }

    fn get_user_by_username(&self, username: &str) -> Option<User> {
        (**self).get_user_by_username(username)
    }
}

impl<T: EventRepository + ?Sized> EventRepository for &T {
    fn create_event(&self, input: NewEvent) -> Event {
        (**self).create_event(input)
    }

    fn get_event(&self, id: EventId) -> Option<Event> {
        (**self).get_event(id)
    }

    fn list_events(&self) -> Vec<Event> {
        (**self).list_events()
    }
}
