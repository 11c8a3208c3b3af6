//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into use-case level APIs.
//! - Keep API/CLI layers decoupled from storage details.

pub mod event_service;
pub mod seed;
pub mod user_service;
