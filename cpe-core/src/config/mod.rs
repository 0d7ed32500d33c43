//! Configuration types
//!
//! Board pin assignment, optionally loadable through serde.

pub mod board;

pub use board::*;
