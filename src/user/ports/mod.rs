//! Port contracts for user lookups.

pub mod repository;

pub use repository::{UserRepository, UserRepositoryError, UserRepositoryResult};
