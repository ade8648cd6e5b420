//! Teamtasks: task lifecycle and team constraint validation.
//!
//! This crate decides when a collaborative work item may change state, when its
//! fields may be edited, and when a team may be deleted given the tasks that
//! reference it. Transport and storage are left to the host application, which
//! talks to the crate through repository ports.
//!
//! # Architecture
//!
//! Teamtasks follows hexagonal architecture principles:
//!
//! - **Domain**: Pure decision logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for persistence
//! - **Adapters**: Concrete implementations of ports (in-memory stores)
//! - **Services**: Load, decide, persist orchestration for a single request
//!
//! # Modules
//!
//! - [`task`]: Task status transitions and edit locking
//! - [`team`]: Team management and the deletion guard
//! - [`user`]: User records used for referential checks
//! - [`rejection`]: Typed rejection kinds shared by every service

mod ids;
mod presence;
pub mod rejection;
pub mod task;
pub mod team;
pub mod user;
