//! Repository port for user records.

use crate::{
    rejection::RejectionKind,
    user::domain::{User, UserId},
};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for user repository operations.
pub type UserRepositoryResult<T> = Result<T, UserRepositoryError>;

/// User persistence contract.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Stores a new user.
    ///
    /// # Errors
    ///
    /// Returns [`UserRepositoryError::DuplicateUser`] when the user ID already
    /// exists.
    async fn store(&self, user: &User) -> UserRepositoryResult<()>;

    /// Finds a user by identifier.
    ///
    /// Returns `None` when the user does not exist.
    async fn find_by_id(&self, id: UserId) -> UserRepositoryResult<Option<User>>;

    /// Returns whether a user with the given identifier exists.
    async fn exists(&self, id: UserId) -> UserRepositoryResult<bool> {
        Ok(self.find_by_id(id).await?.is_some())
    }
}

/// Errors returned by user repository implementations.
#[derive(Debug, Clone, Error)]
pub enum UserRepositoryError {
    /// A user with the same identifier already exists.
    #[error("duplicate user identifier: {0}")]
    DuplicateUser(UserId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl UserRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }

    /// Classifies the error for callers.
    ///
    /// Returns `None` for persistence failures.
    #[must_use]
    pub const fn rejection(&self) -> Option<RejectionKind> {
        match self {
            Self::DuplicateUser(_) => Some(RejectionKind::Conflict),
            Self::Persistence(_) => None,
        }
    }
}
