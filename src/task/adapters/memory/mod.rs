//! In-memory task adapter.

mod task;

pub use task::InMemoryTaskRepository;
