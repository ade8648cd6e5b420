//! In-memory team adapter.

mod team;

pub use team::InMemoryTeamRepository;
