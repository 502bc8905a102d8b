//! SensorForge - batch sensor fault prediction over a versioned model registry
//!
//! Reads sensor readings from CSV, scores them with the latest transformer,
//! classifier and target encoder in the registry, and pushes newly trained
//! artifacts into monotonically numbered version directories.

#![warn(clippy::all)]

pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod pipeline;
pub mod storage;
pub mod utils;

// Re-export commonly used types
pub use crate::config::Config;
pub use crate::error::{Result, SensorForgeError};
pub use crate::models::types::{ArtifactKind, ArtifactPaths};
pub use crate::storage::ModelResolver;
