//! Port traits for infrastructure boundaries.
//!
//! Ports exist for:
//! - Reading host state (live host, JSON file)
//! - Sending requests back to the host
//! - Settings persistence and UI placement
//! - Clock (for testing)

mod error;
mod host;
mod testing;

pub use host::{HostActions, SettingsRepo, SnapshotSource, UiAnchor};
pub use testing::ClockPort;

#[cfg(test)]
pub use host::{MockHostActions, MockSettingsRepo, MockSnapshotSource, MockUiAnchor};

pub use error::PortError;
