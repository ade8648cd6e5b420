//! Domain model for users referenced by tasks and teams.

mod error;
mod ids;
mod user;

pub use error::UserDomainError;
pub use ids::UserId;
pub use user::User;
