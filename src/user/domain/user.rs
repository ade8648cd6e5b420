//! User record.

use super::{UserDomainError, UserId};
use serde::{Deserialize, Serialize};

/// A person who can own teams, create tasks, and be assigned to them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    name: String,
    email: Option<String>,
}

impl User {
    /// Creates a user with a fresh identifier.
    ///
    /// # Errors
    ///
    /// Returns [`UserDomainError::EmptyUserName`] when the name is blank.
    pub fn new(name: impl Into<String>) -> Result<Self, UserDomainError> {
        Self::with_id(UserId::new(), name)
    }

    /// Creates a user with a caller-supplied identifier.
    ///
    /// # Errors
    ///
    /// Returns [`UserDomainError::EmptyUserName`] when the name is blank.
    pub fn with_id(id: UserId, name: impl Into<String>) -> Result<Self, UserDomainError> {
        let raw = name.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(UserDomainError::EmptyUserName);
        }
        Ok(Self {
            id,
            name: trimmed.to_owned(),
            email: None,
        })
    }

    /// Sets the contact email address.
    ///
    /// # Errors
    ///
    /// Returns [`UserDomainError::InvalidEmail`] when the address lacks a
    /// non-empty local part or domain.
    pub fn with_email(mut self, email: impl Into<String>) -> Result<Self, UserDomainError> {
        let raw = email.into();
        let normalized = raw.trim();
        let valid = normalized
            .split_once('@')
            .is_some_and(|(local, domain)| {
                !local.is_empty() && !domain.is_empty() && !domain.contains('@')
            });
        if !valid {
            return Err(UserDomainError::InvalidEmail(raw));
        }
        self.email = Some(normalized.to_owned());
        Ok(self)
    }

    /// Returns the user identifier.
    #[must_use]
    pub const fn id(&self) -> UserId {
        self.id
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the contact email address, if any.
    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }
}
