//! User records for referential validation.
//!
//! Users are owned by the host application. Teamtasks only needs to know
//! whether a user exists when a task names its creator or assignee, or when a
//! team names its owner.
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]

pub mod adapters;
pub mod domain;
pub mod ports;
