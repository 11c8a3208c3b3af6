//! Collaborator-facing API for event and user operations.
//!
//! # Responsibility
//! - Expose list/get/create use cases with HTTP-shaped status codes.
//! - Reject bodies that are not JSON or lack a required field (400).
//!
//! # Invariants
//! - Handlers never panic; every outcome is an `ApiResponse`.
//! - Not-found is a 404 response, not an error.
//! - Passwords never appear in response bodies.

use log::{debug, warn};
use serde::Serialize;
use serde_json::{json, Value};
use showgo_core::{
    CategoryFilter, EventService, MemStore, NewEvent, NewUser, RepoError, User, UserService,
};
use std::sync::Arc;
use uuid::Uuid;

pub const STATUS_OK: u16 = 200;
pub const STATUS_CREATED: u16 = 201;
pub const STATUS_BAD_REQUEST: u16 = 400;
pub const STATUS_NOT_FOUND: u16 = 404;
pub const STATUS_CONFLICT: u16 = 409;
pub const STATUS_INTERNAL_ERROR: u16 = 500;

/// Status code plus JSON body.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Value,
}

impl ApiResponse {
    fn success(status: u16, payload: &impl Serialize) -> Self {
        match serde_json::to_value(payload) {
            Ok(body) => Self { status, body },
            Err(err) => Self::failure(
                STATUS_INTERNAL_ERROR,
                format!("response encoding failed: {err}"),
            ),
        }
    }

    fn failure(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            body: json!({ "message": message.into() }),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Error message for non-success responses.
    pub fn message(&self) -> Option<&str> {
        self.body.get("message").and_then(Value::as_str)
    }
}

/// User projection returned to callers; omits the password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserView {
    pub id: Uuid,
    pub username: String,
}

impl From<User> for UserView {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
        }
    }
}

/// API handlers sharing one store.
#[derive(Clone)]
pub struct ShowGoApi {
    store: Arc<MemStore>,
}

impl ShowGoApi {
    pub fn new(store: Arc<MemStore>) -> Self {
        Self { store }
    }

    /// Builds an API over a freshly seeded store.
    pub fn with_sample_events() -> Self {
        Self::new(Arc::new(MemStore::with_sample_events()))
    }

    pub fn store(&self) -> &Arc<MemStore> {
        &self.store
    }

    /// `GET /api/events`
    pub fn list_events(&self) -> ApiResponse {
        ApiResponse::success(STATUS_OK, &self.events().list_events())
    }

    /// `GET /api/events?category=...`; `All` returns every event.
    pub fn list_events_in_category(&self, category: &str) -> ApiResponse {
        let filter = CategoryFilter::new(category);
        ApiResponse::success(STATUS_OK, &self.events().list_events_in_category(&filter))
    }

    /// `GET /api/events/:id`
    pub fn get_event(&self, id: &str) -> ApiResponse {
        let found = parse_id(id).and_then(|id| self.events().get_event(id));
        match found {
            Some(event) => ApiResponse::success(STATUS_OK, &event),
            None => {
                debug!("event=event_get module=api status=not_found");
                ApiResponse::failure(STATUS_NOT_FOUND, "Event not found")
            }
        }
    }

    /// `POST /api/events` with a JSON `NewEvent` body.
    pub fn create_event(&self, body: &str) -> ApiResponse {
        let input: NewEvent = match serde_json::from_str(body) {
            Ok(input) => input,
            Err(err) => {
                warn!("event=event_create module=api status=rejected reason=malformed_body");
                return ApiResponse::failure(
                    STATUS_BAD_REQUEST,
                    format!("invalid event body: {err}"),
                );
            }
        };

        ApiResponse::success(STATUS_CREATED, &self.events().create_event(input))
    }

    /// `POST /api/users` with a JSON `NewUser` body.
    pub fn create_user(&self, body: &str) -> ApiResponse {
        let input: NewUser = match serde_json::from_str(body) {
            Ok(input) => input,
            Err(err) => {
                warn!("event=user_create module=api status=rejected reason=malformed_body");
                return ApiResponse::failure(
                    STATUS_BAD_REQUEST,
                    format!("invalid user body: {err}"),
                );
            }
        };

        match self.users().create_user(input) {
            Ok(user) => ApiResponse::success(STATUS_CREATED, &UserView::from(user)),
            Err(err @ RepoError::UsernameTaken(_)) => {
                ApiResponse::failure(STATUS_CONFLICT, err.to_string())
            }
        }
    }

    /// `GET /api/users/:id`
    pub fn get_user(&self, id: &str) -> ApiResponse {
        match parse_id(id).and_then(|id| self.users().get_user(id)) {
            Some(user) => ApiResponse::success(STATUS_OK, &UserView::from(user)),
            None => ApiResponse::failure(STATUS_NOT_FOUND, "User not found"),
        }
    }

    fn events(&self) -> EventService<&MemStore> {
        EventService::new(self.store.as_ref())
    }

    fn users(&self) -> UserService<&MemStore> {
        UserService::new(self.store.as_ref())
    }
}

/// Unparsable ids cannot name a stored record, so they read as not-found.
fn parse_id(raw: &str) -> Option<Uuid> {
    Uuid::parse_str(raw.trim()).ok()
}

#[cfg(test)]
mod tests {
    use super::{parse_id, ApiResponse, STATUS_BAD_REQUEST};

    #[test]
    fn parse_id_trims_and_rejects_garbage() {
        let id = "11111111-2222-4333-8444-555555555555";
        assert_eq!(parse_id(&format!(" {id} ")).unwrap().to_string(), id);
        assert!(parse_id("not-an-id").is_none());
        assert!(parse_id("").is_none());
    }

    #[test]
    fn failure_body_carries_message() {
        let response = ApiResponse::failure(STATUS_BAD_REQUEST, "nope");
        assert!(!response.is_success());
        assert_eq!(response.message(), Some("nope"));
    }
}
