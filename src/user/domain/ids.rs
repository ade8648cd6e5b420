//! Identifier type for the user domain.

crate::ids::uuid_id!(
    /// Unique identifier for a user.
    UserId,
    "user"
);
