//! Identifier type for the team domain.

crate::ids::uuid_id!(
    /// Unique identifier for a team.
    TeamId,
    "team"
);
