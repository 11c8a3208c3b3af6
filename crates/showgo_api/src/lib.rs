//! Request/response contract over the ShowGo store.
//!
//! HTTP route wiring lives elsewhere; this crate turns store results into
//! status codes and JSON bodies.

pub mod api;

pub use api::{ApiResponse, ShowGoApi, UserView};
