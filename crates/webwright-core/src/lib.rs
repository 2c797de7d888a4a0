//! Core library for the webwright CLI
//!
//! Provides the package registry data model and the shared error type used
//! across the workspace crates.

pub mod error;
pub mod types;

pub use error::{Error, Result};
