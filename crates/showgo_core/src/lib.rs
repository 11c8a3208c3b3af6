//! Core domain logic for ShowGo.
//! This crate owns the event/user records, the in-memory store, and the
//! category filter used by listing pages.

pub mod config;
pub mod filter;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use config::{AppConfig, ConfigError};
pub use filter::{filter_events, CategoryFilter, ALL_CATEGORIES, KNOWN_CATEGORIES};
pub use logging::{
    default_log_level, init_from_config, init_logging, logging_status, LoggingError,
};
pub use model::event::{Event, EventId, NewEvent};
pub use model::user::{NewUser, User, UserId};
pub use repo::clock::{Clock, ManualClock, SystemClock};
pub use repo::mem_store::MemStore;
pub use repo::{EventRepository, RepoError, RepoResult, UserRepository};
pub use service::event_service::EventService;
pub use service::seed::{sample_events, seed_sample_events};
pub use service::user_service::UserService;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
