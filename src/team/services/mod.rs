//! Application services for team management.

mod team;

pub use team::{
    CreateTeamRequest, TeamService, TeamServiceError, TeamServiceResult, UpdateTeamRequest,
};
