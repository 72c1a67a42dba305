//! Infrastructure implementations.
//!
//! Contains port trait implementations for external dependencies.

pub mod clock;
pub mod config;
pub mod correlation;
pub mod headless;
pub mod ports;
pub mod settings;
pub mod snapshot_file;
