//! Adapter implementations for the team repository port.

pub mod memory;
