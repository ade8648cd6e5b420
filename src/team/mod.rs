//! Team management and deletion constraints.
//!
//! Teams own tasks. A team may be renamed or re-described freely, but it can
//! only be deleted once none of its tasks are pending or in progress. The
//! module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
