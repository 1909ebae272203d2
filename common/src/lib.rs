//! Common utilities and abstractions for the Fanout project.
//!
//! This module provides the shared error types used across the workspace.

pub mod error;

pub use error::{CommonError, Result};
