//! Domain model for teams.

mod error;
mod guard;
mod ids;
mod team;

pub use error::TeamDomainError;
pub use guard::TeamDeletionGuard;
pub use ids::TeamId;
pub use team::{PersistedTeamData, Team};
