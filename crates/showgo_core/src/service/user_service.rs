//! User use-case service.

use crate::model::user::{NewUser, User, UserId};
use crate::repo::{RepoResult, UserRepository};
use log::info;

/// Use-case service wrapper for user operations.
pub struct UserService<R: UserRepository> {
    repo: R,
}

impl<R: UserRepository> UserService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Registers a user.
    ///
    /// Returns `RepoError::UsernameTaken` when the username is in use.
    pub fn create_user(&self, input: NewUser) -> RepoResult<User> {
        let user = self.repo.create_user(input)?;
        info!("event=user_create module=service status=ok id={}", user.id);
        Ok(user)
    }

    pub fn get_user(&self, id: UserId) -> Option<User> {
        self.repo.get_user(id)
    }

    pub fn find_by_username(&self, username: &str) -> Option<User> {
        self.repo.get_user_by_username(username)
    }
}
