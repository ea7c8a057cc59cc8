//! gitref-core - Core library for gitref
//!
//! This crate reads the HEAD commit of the current git repository and writes
//! it to `<commit>.txt`, choosing the destination folder from configuration
//! with a fallback to the user's desktop or home directory.

pub mod capability;
pub mod config;
pub mod error;
pub mod export;
pub mod filesystem;
pub mod git;
pub mod types;

pub use error::{ErrorKind, GitRefError, Result};
pub use types::*;
