//! # Command Layer
//!
//! Business logic for each CLI command, operating on Rust types and the collaborator
//! traits. Nothing here writes to stdout or stderr.

pub mod add;
