//! Repository implementations module.
//!
//! Currently a single implementation:
//! - `local`: in-memory implementation for unit testing and local development
pub mod local;

pub use local::LocalRepository;
