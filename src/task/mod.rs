//! Task lifecycle management.
//!
//! Tasks start pending and move through a fixed status graph. Once completed
//! or cancelled a task is locked against any further edit. The module follows
//! hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
