//! Domain records held by the ShowGo store.
//!
//! # Responsibility
//! - Define the canonical `User` and `Event` records.
//! - Define structured insert payloads (`NewUser`, `NewEvent`).
//!
//! # Invariants
//! - Record identifiers are assigned by the store, never by callers.
//! - Insert payloads never carry `id` or `created_at`.

pub mod event;
pub mod user;
